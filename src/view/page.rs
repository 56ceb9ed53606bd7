//! Page-level state machines with stale-response protection.
//!
//! Each page instance owns one [`ViewState`] cell and a monotonically
//! increasing request token. `navigate` bumps the token before resolving and
//! applies the outcome only if the token is still current, so a fetch that
//! loses a race against a newer navigation is dropped instead of flickering
//! outdated content onto the page.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

use folio_api_types::Post;

use crate::api::{ApiClient, FetchError};
use crate::store::lock::{rw_read, rw_write};
use crate::store::{ContentStore, StoreStatus};
use crate::view::resolver::{self, CategoryView, ListParams, PostListView};

const SOURCE: &str = "view::page";

/// Render state of a single page instance.
///
/// `Error` is non-fatal: it carries the message for an empty-state rendering,
/// never a crash.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Latest-wins request gate: resolutions carrying an outdated token are
/// discarded and the state keeps whatever the newest navigation produced.
struct RequestGate<T> {
    state: RwLock<ViewState<T>>,
    seq: AtomicU64,
}

impl<T: Clone> RequestGate<T> {
    fn new() -> Self {
        Self {
            state: RwLock::new(ViewState::Idle),
            seq: AtomicU64::new(0),
        }
    }

    fn begin(&self) -> u64 {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *rw_write(&self.state, SOURCE, "begin") = ViewState::Loading;
        token
    }

    fn settle(&self, token: u64, outcome: Result<T, FetchError>) -> ViewState<T> {
        if self.seq.load(Ordering::SeqCst) != token {
            debug!(token, "discarding stale page resolution");
            return self.current();
        }
        let next = match outcome {
            Ok(view) => ViewState::Ready(view),
            Err(error) => {
                warn!(error = %error, "page resolution failed");
                ViewState::Error(error.to_string())
            }
        };
        *rw_write(&self.state, SOURCE, "settle") = next.clone();
        next
    }

    fn current(&self) -> ViewState<T> {
        rw_read(&self.state, SOURCE, "current").clone()
    }
}

/// The post-list page (home feed, paginated archive, search results).
pub struct ListPage {
    store: Arc<ContentStore>,
    api: Arc<ApiClient>,
    gate: RequestGate<PostListView>,
}

impl ListPage {
    pub fn new(store: Arc<ContentStore>, api: Arc<ApiClient>) -> Self {
        Self {
            store,
            api,
            gate: RequestGate::new(),
        }
    }

    pub fn state(&self) -> ViewState<PostListView> {
        self.gate.current()
    }

    /// Apply a route-parameter change and resolve the new view.
    pub async fn navigate(&self, params: ListParams) -> ViewState<PostListView> {
        let token = self.gate.begin();
        let outcome = resolver::resolve_post_list(&self.store, &self.api, &params).await;
        self.gate.settle(token, outcome)
    }
}

/// The single-post page, fetching the full content body.
pub struct DetailPage {
    api: Arc<ApiClient>,
    gate: RequestGate<Post>,
}

impl DetailPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            gate: RequestGate::new(),
        }
    }

    pub fn state(&self) -> ViewState<Post> {
        self.gate.current()
    }

    pub async fn navigate(&self, id: &str) -> ViewState<Post> {
        let token = self.gate.begin();
        let outcome = self.api.post_detail(id).await;
        self.gate.settle(token, outcome)
    }
}

/// The category-detail page. Never fetches: it filters the snapshot and
/// stays `Loading` until the store's bulk fetch has landed.
pub struct CategoryPage {
    store: Arc<ContentStore>,
    gate: RequestGate<CategoryView>,
}

impl CategoryPage {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            gate: RequestGate::new(),
        }
    }

    pub fn state(&self) -> ViewState<CategoryView> {
        self.gate.current()
    }

    pub fn navigate(&self, slug: &str) -> ViewState<CategoryView> {
        let token = self.gate.begin();
        if self.store.status() == StoreStatus::Loading {
            return self.gate.current();
        }
        let view = resolver::resolve_category(&self.store.snapshot(), slug);
        self.gate.settle(token, Ok(view))
    }
}
