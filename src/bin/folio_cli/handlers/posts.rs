use std::sync::Arc;

use folio::api::ApiClient;
use folio::store::ContentStore;
use folio::view::{DetailPage, ListPage, ListParams, ViewState};

use crate::args::PostsCmd;
use crate::print;

pub async fn list(store: &Arc<ContentStore>, api: &Arc<ApiClient>, cmd: PostsCmd) {
    let page = ListPage::new(Arc::clone(store), Arc::clone(api));
    let params = ListParams {
        query: cmd.query,
        page: cmd.page,
    };
    match page.navigate(params).await {
        ViewState::Ready(view) => print::post_list(&view),
        ViewState::Error(_) => print::empty_state("No articles found."),
        ViewState::Idle | ViewState::Loading => {}
    }
}

pub async fn show(api: &Arc<ApiClient>, id: &str) {
    let page = DetailPage::new(Arc::clone(api));
    match page.navigate(id).await {
        ViewState::Ready(post) => print::post_detail(&post),
        ViewState::Error(_) => print::empty_state("Post not found."),
        ViewState::Idle | ViewState::Loading => {}
    }
}
