use std::sync::Arc;

use folio::store::ContentStore;
use folio::view::{CategoryPage, ViewState};

use crate::print;

pub fn list(store: &Arc<ContentStore>) {
    print::category_list(&store.snapshot().categories);
}

pub fn detail(store: &Arc<ContentStore>, slug: &str) {
    let page = CategoryPage::new(Arc::clone(store));
    match page.navigate(slug) {
        ViewState::Ready(view) => print::category_view(&view),
        ViewState::Error(_) => print::empty_state("No articles found in this category yet."),
        ViewState::Idle | ViewState::Loading => {}
    }
}
