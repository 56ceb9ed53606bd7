#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use httpmock::MockServer;
use serde_json::{Value, json};

use folio::api::ApiClient;
use folio::store::ContentStore;

use crate::args::{Cli, Commands, PostsCmd};
use crate::handlers::{categories, posts};

fn post_json(id: u32, title: &str, category: &str) -> Value {
    json!({
        "id": id.to_string(),
        "title": title,
        "excerpt": format!("Excerpt for {title}"),
        "date": "January 02, 2026",
        "author": "Alex Winter",
        "tags": ["abap"],
        "category": category
    })
}

fn posts_fixture(count: u32) -> Value {
    let posts: Vec<Value> = (1..=count)
        .map(|id| post_json(id, &format!("Post {id}"), "General"))
        .collect();
    Value::Array(posts)
}

async fn ready_store(server: &MockServer) -> (Arc<ApiClient>, Arc<ContentStore>) {
    let api = Arc::new(
        ApiClient::new(&server.base_url(), Duration::from_secs(5)).expect("api client"),
    );
    let store = Arc::new(ContentStore::new(Arc::clone(&api), 100));
    store.initialize().await;
    (api, store)
}

#[test]
fn cli_parses_posts_flags() {
    let cli = Cli::parse_from([
        "folio-cli",
        "--site",
        "http://blog.example",
        "posts",
        "--page",
        "2",
        "-q",
        "fiori",
    ]);

    assert_eq!(cli.overrides.site.as_deref(), Some("http://blog.example"));
    match cli.command {
        Commands::Posts(cmd) => {
            assert_eq!(cmd.page, 2);
            assert_eq!(cmd.query.as_deref(), Some("fiori"));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[tokio::test]
async fn first_page_is_served_from_the_snapshot() {
    let server = MockServer::start();
    let bulk = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("per_page", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(posts_fixture(12));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    let paged = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("per_page", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "posts": [], "pages": 0 }));
    });

    let (api, store) = ready_store(&server).await;
    posts::list(&store, &api, PostsCmd::default()).await;

    bulk.assert_hits(1);
    paged.assert_hits(0);
}

#[tokio::test]
async fn deep_page_fetches_the_api() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("per_page", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(posts_fixture(12));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    let paged = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("page", "3")
            .query_param("per_page", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "posts": [post_json(21, "Post 21", "General")], "pages": 3 }));
    });

    let (api, store) = ready_store(&server).await;
    posts::list(
        &store,
        &api,
        PostsCmd {
            page: 3,
            query: None,
        },
    )
    .await;

    paged.assert();
}

#[tokio::test]
async fn search_always_hits_the_api() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("per_page", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(posts_fixture(12));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    let search = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("q", "fiori")
            .query_param("page", "1")
            .query_param("per_page", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "posts": [], "pages": 0 }));
    });

    let (api, store) = ready_store(&server).await;
    posts::list(
        &store,
        &api,
        PostsCmd {
            page: 1,
            query: Some("fiori".to_string()),
        },
    )
    .await;

    search.assert();
}

#[tokio::test]
async fn category_detail_stays_local() {
    let server = MockServer::start();
    let bulk = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("per_page", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([post_json(1, "Post 1", "Cloud Development")]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([{
                "id": "1",
                "name": "Cloud Development",
                "description": "",
                "count": 1,
                "color": "#0A6ED1"
            }]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    let by_category = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("category", "cloud-development");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let (_api, store) = ready_store(&server).await;
    categories::detail(&store, "cloud-development");

    bulk.assert_hits(1);
    by_category.assert_hits(0);
}

#[tokio::test]
async fn show_fetches_the_detail_endpoint() {
    let server = MockServer::start();
    let detail = server.mock(|when, then| {
        when.method("GET").path("/api/posts/42");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "id": "42",
                "title": "Answer",
                "content": "<p>Everything</p>",
                "date": "January 02, 2026",
                "author": "Alex Winter",
                "tags": [],
                "category": "General"
            }));
    });

    let api = Arc::new(
        ApiClient::new(&server.base_url(), Duration::from_secs(5)).expect("api client"),
    );
    posts::show(&api, "42").await;

    detail.assert();
}
