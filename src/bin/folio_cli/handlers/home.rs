use std::sync::Arc;

use folio::store::ContentStore;

use crate::print;

/// Featured posts shown on the home view.
const FEATURED_COUNT: usize = 3;

pub fn handle(store: &Arc<ContentStore>) {
    let snapshot = store.snapshot();
    if snapshot.posts.is_empty() {
        print::empty_state("No articles found.");
        return;
    }
    println!("Latest articles");
    for post in snapshot.posts.iter().take(FEATURED_COUNT) {
        print::post_line(post);
    }
}
