//! Cache-hit versus network-fetch decisions for the post pages.
//!
//! The resolution order for a post list is fixed:
//!
//! 1. a search query always goes to the server; the snapshot has no search
//!    index;
//! 2. page 1 with no query is served from a ready, non-empty snapshot
//!    without touching the network;
//! 3. everything else (deeper pages, empty or still-loading snapshot) is a
//!    paginated server fetch.
//!
//! Category pages never fetch: they filter the snapshot, tolerating unknown
//! slugs by falling back to loose matching on each post's own category name.

use metrics::counter;

use folio_api_types::{Category, Post};

use crate::api::{ApiClient, FetchError, PostQuery};
use crate::domain::slug::{category_slug, display_name};
use crate::store::{ContentStore, Snapshot, StoreStatus};

/// Page size shared with the server (`per_page`).
pub const PAGE_SIZE: u32 = 10;

/// Route parameters of a post-list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub query: Option<String>,
    /// 1-based page number; zero is treated as page 1.
    pub page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            query: None,
            page: 1,
        }
    }
}

impl ListParams {
    pub fn page(page: u32) -> Self {
        Self { query: None, page }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            page: 1,
        }
    }
}

/// Where a resolved list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    Snapshot,
    Remote,
}

/// A resolved post list plus its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PostListView {
    pub posts: Vec<Post>,
    pub page: u32,
    pub total_pages: u32,
    pub origin: ListOrigin,
}

/// Resolve a post-list page, preferring the snapshot whenever the requested
/// slice is fully contained in it.
pub async fn resolve_post_list(
    store: &ContentStore,
    api: &ApiClient,
    params: &ListParams,
) -> Result<PostListView, FetchError> {
    let page = params.page.max(1);
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|query| !query.is_empty());

    if let Some(query) = query {
        counter!("folio_search_bypass_total").increment(1);
        let fetched = api
            .list_posts(&PostQuery {
                page: Some(page),
                per_page: Some(PAGE_SIZE),
                query: Some(query.to_string()),
                ..PostQuery::default()
            })
            .await?;
        return Ok(PostListView {
            posts: fetched.items,
            page,
            total_pages: fetched.total_pages,
            origin: ListOrigin::Remote,
        });
    }

    let snapshot = store.snapshot();
    if page == 1 && store.status() == StoreStatus::Ready && !snapshot.posts.is_empty() {
        counter!("folio_cache_hit_total").increment(1);
        let posts = snapshot
            .posts
            .iter()
            .take(PAGE_SIZE as usize)
            .cloned()
            .collect();
        return Ok(PostListView {
            posts,
            page,
            total_pages: total_pages(snapshot.posts.len()),
            origin: ListOrigin::Snapshot,
        });
    }

    counter!("folio_cache_miss_total").increment(1);
    let fetched = api
        .list_posts(&PostQuery {
            page: Some(page),
            per_page: Some(PAGE_SIZE),
            ..PostQuery::default()
        })
        .await?;
    Ok(PostListView {
        posts: fetched.items,
        page,
        total_pages: fetched.total_pages,
        origin: ListOrigin::Remote,
    })
}

/// Number of pages needed to show `count` posts at [`PAGE_SIZE`] per page.
pub fn total_pages(count: usize) -> u32 {
    u32::try_from(count.div_ceil(PAGE_SIZE as usize)).unwrap_or(u32::MAX)
}

/// A resolved category page.
///
/// `category` is `None` when the slug matched no known category and the
/// posts were found through the loose fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub category: Option<Category>,
    pub posts: Vec<Post>,
}

/// Resolve a category page entirely from the snapshot.
///
/// The category is found by comparing each category name's slug to the URL
/// slug. When none matches (a stale link, a renamed category), posts whose
/// own category name slugs to the same value are still returned instead of
/// silently showing nothing.
pub fn resolve_category(snapshot: &Snapshot, slug: &str) -> CategoryView {
    if let Some(category) = snapshot
        .categories
        .iter()
        .find(|category| category_slug(&category.name) == slug)
    {
        let posts = snapshot
            .posts
            .iter()
            .filter(|post| post.category == category.name)
            .cloned()
            .collect();
        return CategoryView {
            name: category.name.clone(),
            category: Some(category.clone()),
            posts,
        };
    }

    let posts: Vec<Post> = snapshot
        .posts
        .iter()
        .filter(|post| category_slug(&post.category) == slug)
        .cloned()
        .collect();
    CategoryView {
        name: display_name(slug),
        category: None,
        posts,
    }
}
