use std::sync::Arc;

use folio::store::ContentStore;

use crate::print;

pub fn handle(store: &Arc<ContentStore>) {
    print::tag_list(&store.snapshot().tags);
}
