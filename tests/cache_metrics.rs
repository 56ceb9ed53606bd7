//! Verifies the metric keys emitted along the cache-hit, cache-miss, search
//! and failed-fetch paths.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use httpmock::MockServer;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use serde_json::{Value, json};

use folio::api::ApiClient;
use folio::store::ContentStore;
use folio::view::{ListParams, resolve_post_list};

fn posts_fixture(count: u32) -> Value {
    let posts: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id.to_string(),
                "title": format!("Post {id}"),
                "excerpt": "",
                "date": "January 02, 2026",
                "author": "Alex Winter",
                "tags": [],
                "category": "General"
            })
        })
        .collect();
    Value::Array(posts)
}

#[tokio::test]
async fn cache_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("per_page", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(posts_fixture(25));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    // Tags fail on purpose: the degraded path must be counted.
    server.mock(|when, then| {
        when.method("GET").path("/api/tags");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"error":"boom"}"#);
    });
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("page", "2")
            .query_param("per_page", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "posts": [], "pages": 3 }));
    });
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .query_param("q", "fiori")
            .query_param("page", "1")
            .query_param("per_page", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "posts": [], "pages": 0 }));
    });

    let api = Arc::new(
        ApiClient::new(&server.base_url(), Duration::from_secs(5)).expect("api client"),
    );
    let store = ContentStore::new(Arc::clone(&api), 100);
    store.initialize().await;

    resolve_post_list(&store, &api, &ListParams::page(1))
        .await
        .expect("snapshot hit");
    resolve_post_list(&store, &api, &ListParams::page(2))
        .await
        .expect("remote fallback");
    resolve_post_list(&store, &api, &ListParams::search("fiori"))
        .await
        .expect("search bypass");

    let counters: HashMap<String, u64> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter_map(|(key, _, _, value)| match value {
            DebugValue::Counter(count) => Some((key.key().name().to_string(), count)),
            _ => None,
        })
        .collect();

    assert_eq!(counters.get("folio_cache_hit_total"), Some(&1));
    assert_eq!(counters.get("folio_cache_miss_total"), Some(&1));
    assert_eq!(counters.get("folio_search_bypass_total"), Some(&1));
    assert_eq!(counters.get("folio_store_fetch_failed_total"), Some(&1));
}
