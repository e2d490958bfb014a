use std::sync::Arc;

use crate::error::StoreResult;
use crate::model::NamedTagList;
use crate::service::IdGenerator;
use crate::store::NamedTagListRepository;

/// Business rules for creating named tag lists. Identifiers are minted here
/// and nowhere else.
#[async_trait::async_trait]
pub trait NamedTagListService: Send + Sync {
    /// Assign a fresh id to `named_tag_list`, store it in `bucket` and return
    /// the stored value. Repository errors are returned unchanged.
    async fn create(&self, bucket: &str, named_tag_list: NamedTagList)
        -> StoreResult<NamedTagList>;
}

pub struct DefaultNamedTagListService {
    repository: Arc<dyn NamedTagListRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl DefaultNamedTagListService {
    pub fn new(
        repository: Arc<dyn NamedTagListRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }
}

#[async_trait::async_trait]
impl NamedTagListService for DefaultNamedTagListService {
    async fn create(
        &self,
        bucket: &str,
        named_tag_list: NamedTagList,
    ) -> StoreResult<NamedTagList> {
        let named_tag_list = named_tag_list.with_id(self.id_generator.generate());
        self.repository.create(bucket, &named_tag_list).await?;
        Ok(named_tag_list)
    }
}
