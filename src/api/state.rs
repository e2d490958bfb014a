use std::sync::Arc;

use crate::logging::ErrorLogger;
use crate::model::Build;
use crate::service::{
    DefaultNamedTagListService, DefaultPostService, IdGenerator, NamedTagListService, PostService,
};
use crate::store::{NamedTagListRepository, PostRepository, Store};

/// Collaborators shared by every handler. Holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub named_tag_lists: Arc<dyn NamedTagListRepository>,
    pub named_tag_list_service: Arc<dyn NamedTagListService>,
    pub posts: Arc<dyn PostRepository>,
    pub post_service: Arc<dyn PostService>,
    pub logger: Arc<dyn ErrorLogger>,
    pub build: Arc<Build>,
}

impl AppState {
    /// Wire the services on top of a single store
    pub fn new<S: Store + 'static>(
        store: Arc<S>,
        id_generator: Arc<dyn IdGenerator>,
        logger: Arc<dyn ErrorLogger>,
        build: Build,
    ) -> Self {
        let named_tag_lists: Arc<dyn NamedTagListRepository> = store.clone();
        let posts: Arc<dyn PostRepository> = store;

        Self {
            named_tag_list_service: Arc::new(DefaultNamedTagListService::new(
                named_tag_lists.clone(),
                id_generator.clone(),
            )),
            post_service: Arc::new(DefaultPostService::new(posts.clone(), id_generator)),
            named_tag_lists,
            posts,
            logger,
            build: Arc::new(build),
        }
    }
}
