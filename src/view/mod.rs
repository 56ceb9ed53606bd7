//! Per-page view derivation over the content store.
//!
//! [`resolver`] holds the cache-hit versus network-fetch decisions; [`page`]
//! wraps them in per-page state machines with stale-response protection.

mod page;
mod resolver;

pub use page::{CategoryPage, DetailPage, ListPage, ViewState};
pub use resolver::{
    CategoryView, ListOrigin, ListParams, PAGE_SIZE, PostListView, resolve_category,
    resolve_post_list, total_pages,
};
