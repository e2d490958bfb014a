use crate::error::StoreResult;
use crate::model::{Id, NamedTagList, Post};

/// Bucket-scoped persistence for named tag lists.
///
/// Reads and bulk deletes are scoped by bucket; replace and delete-by-id are
/// scoped by id only. An empty bucket or id list matches nothing.
#[async_trait::async_trait]
pub trait NamedTagListRepository: Send + Sync {
    /// List every record whose bucket is one of `buckets`, oldest first
    async fn find_all(&self, buckets: &[String]) -> StoreResult<Vec<NamedTagList>>;
    /// Persist `named_tag_list` (which must already carry its id) into `bucket`
    async fn create(&self, bucket: &str, named_tag_list: &NamedTagList) -> StoreResult<()>;
    /// Overwrite name and tags of every record whose id is in `ids`
    async fn replace_by_ids(&self, ids: &[Id], replacement: &NamedTagList) -> StoreResult<()>;
    async fn delete_by_ids(&self, ids: &[Id]) -> StoreResult<()>;
    async fn delete_all(&self, buckets: &[String]) -> StoreResult<()>;
}

#[async_trait::async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Post>>;
    async fn create(&self, post: &Post) -> StoreResult<()>;
    async fn delete_all(&self) -> StoreResult<()>;
}

pub trait Store: NamedTagListRepository + PostRepository + Send + Sync {}
impl<T: NamedTagListRepository + PostRepository + Send + Sync> Store for T {}
