//! Canonical in-memory content snapshot and its lifecycle.
//!
//! [`ContentStore`] performs one bulk fetch of posts, categories and tags and
//! keeps the result as an immutable [`Snapshot`] behind an `Arc`. Refreshing
//! re-runs the bulk fetch and installs the replacement in a single
//! assignment, so readers either see the whole old snapshot or the whole new
//! one, never a mix. A failed sub-fetch degrades to an empty slice for that
//! collection; it neither aborts the other fetches nor escapes the store.

pub(crate) mod lock;

use std::sync::{Arc, RwLock};

use metrics::counter;
use tokio::sync::watch;
use tracing::debug;

use folio_api_types::{Category, Post};

use crate::api::{ApiClient, FetchError, PostQuery};

const SOURCE: &str = "store";

/// Lifecycle of the store's bulk fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Loading,
    Ready,
}

/// Immutable bundle of everything the bulk fetch produced.
///
/// `posts` keeps the server's order (date-descending) and is capped at the
/// configured cache limit; `tags` are deduplicated server-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<String>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }
}

/// Owner of the canonical snapshot.
///
/// Constructed once at application start with its [`ApiClient`] injected, and
/// shared by reference with every page; it is not an ambient global.
pub struct ContentStore {
    api: Arc<ApiClient>,
    cache_posts_limit: u32,
    snapshot: RwLock<Arc<Snapshot>>,
    status_tx: watch::Sender<StoreStatus>,
}

impl ContentStore {
    pub fn new(api: Arc<ApiClient>, cache_posts_limit: u32) -> Self {
        let (status_tx, _) = watch::channel(StoreStatus::Loading);
        Self {
            api,
            cache_posts_limit,
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
            status_tx,
        }
    }

    /// Run the initial bulk fetch. Equivalent to [`ContentStore::refresh`];
    /// named separately to mark the application-start call site.
    pub async fn initialize(&self) {
        self.refresh().await;
    }

    /// Re-run the bulk fetch and replace the snapshot wholesale.
    ///
    /// The three requests are independent and issued concurrently; the status
    /// flips to `Ready` only after all of them settle, success or not.
    pub async fn refresh(&self) {
        self.status_tx.send_replace(StoreStatus::Loading);

        let posts_query = PostQuery {
            per_page: Some(self.cache_posts_limit),
            ..PostQuery::default()
        };
        let (posts, categories, tags) = tokio::join!(
            self.api.list_posts(&posts_query),
            self.api.categories(),
            self.api.tags(),
        );

        let snapshot = Snapshot {
            posts: slice_or_empty(posts.map(|page| page.items), "posts"),
            categories: slice_or_empty(categories, "categories"),
            tags: slice_or_empty(tags, "tags"),
        };
        debug!(
            posts = snapshot.posts.len(),
            categories = snapshot.categories.len(),
            tags = snapshot.tags.len(),
            "installed content snapshot"
        );

        *lock::rw_write(&self.snapshot, SOURCE, "refresh.install") = Arc::new(snapshot);
        self.status_tx.send_replace(StoreStatus::Ready);
    }

    /// Current snapshot reference; never blocks on network I/O.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&lock::rw_read(&self.snapshot, SOURCE, "snapshot"))
    }

    pub fn status(&self) -> StoreStatus {
        *self.status_tx.borrow()
    }

    /// Observe `Loading`/`Ready` transitions, e.g. to re-derive a page view
    /// once the snapshot lands.
    pub fn subscribe(&self) -> watch::Receiver<StoreStatus> {
        self.status_tx.subscribe()
    }

    /// Wait until the store has finished its current bulk fetch.
    pub async fn ready(&self) {
        let mut rx = self.status_tx.subscribe();
        // Cannot fail: the sender lives as long as `self`.
        let _ = rx.wait_for(|status| *status == StoreStatus::Ready).await;
    }
}

fn slice_or_empty<T>(result: Result<Vec<T>, FetchError>, slice: &'static str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(error) => {
            counter!("folio_store_fetch_failed_total", "slice" => slice).increment(1);
            tracing::warn!(slice, error = %error, "bulk fetch failed; serving empty slice");
            Vec::new()
        }
    }
}
