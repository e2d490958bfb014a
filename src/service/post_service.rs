use std::sync::Arc;

use crate::error::StoreResult;
use crate::model::Post;
use crate::service::IdGenerator;
use crate::store::PostRepository;

#[async_trait::async_trait]
pub trait PostService: Send + Sync {
    async fn create(&self, post: Post) -> StoreResult<Post>;
}

pub struct DefaultPostService {
    repository: Arc<dyn PostRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl DefaultPostService {
    pub fn new(repository: Arc<dyn PostRepository>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }
}

#[async_trait::async_trait]
impl PostService for DefaultPostService {
    async fn create(&self, mut post: Post) -> StoreResult<Post> {
        post.id = self.id_generator.generate();
        self.repository.create(&post).await?;
        Ok(post)
    }
}
