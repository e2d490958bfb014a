use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::model::{Id, NamedTagList, Post};
use crate::store::traits::{NamedTagListRepository, PostRepository};

#[derive(Debug, Clone)]
struct BucketedNamedTagList {
    bucket: String,
    named_tag_list: NamedTagList,
}

/// In-process store with the same bucket and id semantics as
/// [`PostgresStore`](crate::store::PostgresStore). Records keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    named_tag_lists: RwLock<Vec<BucketedNamedTagList>>,
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket a stored record was created in, if it exists
    pub fn bucket_of(&self, id: &str) -> Option<String> {
        self.named_tag_lists
            .read()
            .iter()
            .find(|entry| entry.named_tag_list.id == id)
            .map(|entry| entry.bucket.clone())
    }

    pub fn named_tag_list_count(&self) -> usize {
        self.named_tag_lists.read().len()
    }
}

#[async_trait::async_trait]
impl NamedTagListRepository for MemoryStore {
    async fn find_all(&self, buckets: &[String]) -> StoreResult<Vec<NamedTagList>> {
        Ok(self
            .named_tag_lists
            .read()
            .iter()
            .filter(|entry| buckets.contains(&entry.bucket))
            .map(|entry| entry.named_tag_list.clone())
            .collect())
    }

    async fn create(&self, bucket: &str, named_tag_list: &NamedTagList) -> StoreResult<()> {
        self.named_tag_lists.write().push(BucketedNamedTagList {
            bucket: bucket.to_string(),
            named_tag_list: named_tag_list.clone(),
        });
        Ok(())
    }

    async fn replace_by_ids(&self, ids: &[Id], replacement: &NamedTagList) -> StoreResult<()> {
        for entry in self.named_tag_lists.write().iter_mut() {
            if ids.contains(&entry.named_tag_list.id) {
                entry.named_tag_list.name = replacement.name.clone();
                entry.named_tag_list.tags = replacement.tags.clone();
            }
        }
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[Id]) -> StoreResult<()> {
        self.named_tag_lists
            .write()
            .retain(|entry| !ids.contains(&entry.named_tag_list.id));
        Ok(())
    }

    async fn delete_all(&self, buckets: &[String]) -> StoreResult<()> {
        self.named_tag_lists
            .write()
            .retain(|entry| !buckets.contains(&entry.bucket));
        Ok(())
    }
}

#[async_trait::async_trait]
impl PostRepository for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.read().clone())
    }

    async fn create(&self, post: &Post) -> StoreResult<()> {
        self.posts.write().push(post.clone());
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.posts.write().clear();
        Ok(())
    }
}
