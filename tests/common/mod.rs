#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use hashbang::error::{StoreError, StoreResult};
use hashbang::logging::ErrorLogger;
use hashbang::service::IdGenerator;
use hashbang::store::{NamedTagListRepository, PostRepository};
use hashbang::{AppState, Build, Id, MemoryStore, NamedTagList, Post};
use parking_lot::Mutex;
use tower::ServiceExt;

#[derive(Default)]
pub struct StubLogger {
    pub errors: Mutex<Vec<String>>,
}

impl ErrorLogger for StubLogger {
    fn error(&self, err: &(dyn std::error::Error + 'static)) {
        self.errors.lock().push(err.to_string());
    }
}

/// Hands out `id-1`, `id-2`, ... in order.
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: Mutex<u32>,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> Id {
        let mut next = self.next.lock();
        *next += 1;
        format!("id-{}", next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindAll(Vec<String>),
    Create(String, NamedTagList),
    ReplaceByIds(Vec<String>, NamedTagList),
    DeleteByIds(Vec<String>),
    DeleteAll(Vec<String>),
    FindAllPosts,
    CreatePost(Post),
    DeleteAllPosts,
}

/// Records every call and fails each one with "there was an error".
#[derive(Default)]
pub struct FailingStore {
    pub calls: Mutex<Vec<Call>>,
}

impl FailingStore {
    fn fail(&self, call: Call) -> StoreResult<()> {
        self.calls.lock().push(call);
        Err(StoreError::Backend("there was an error".to_string()))
    }
}

#[async_trait::async_trait]
impl NamedTagListRepository for FailingStore {
    async fn find_all(&self, buckets: &[String]) -> StoreResult<Vec<NamedTagList>> {
        self.fail(Call::FindAll(buckets.to_vec()))?;
        Ok(Vec::new())
    }
    async fn create(&self, bucket: &str, named_tag_list: &NamedTagList) -> StoreResult<()> {
        self.fail(Call::Create(bucket.to_string(), named_tag_list.clone()))
    }
    async fn replace_by_ids(&self, ids: &[Id], replacement: &NamedTagList) -> StoreResult<()> {
        self.fail(Call::ReplaceByIds(ids.to_vec(), replacement.clone()))
    }
    async fn delete_by_ids(&self, ids: &[Id]) -> StoreResult<()> {
        self.fail(Call::DeleteByIds(ids.to_vec()))
    }
    async fn delete_all(&self, buckets: &[String]) -> StoreResult<()> {
        self.fail(Call::DeleteAll(buckets.to_vec()))
    }
}

#[async_trait::async_trait]
impl PostRepository for FailingStore {
    async fn find_all(&self) -> StoreResult<Vec<Post>> {
        self.fail(Call::FindAllPosts)?;
        Ok(Vec::new())
    }
    async fn create(&self, post: &Post) -> StoreResult<()> {
        self.fail(Call::CreatePost(post.clone()))
    }
    async fn delete_all(&self) -> StoreResult<()> {
        self.fail(Call::DeleteAllPosts)
    }
}

pub struct TestApp {
    pub router: Router,
    pub logger: Arc<StubLogger>,
}

pub fn build() -> Build {
    Build::new("deadbeef", "1.2.3")
}

pub fn app_with<S>(store: Arc<S>) -> TestApp
where
    S: NamedTagListRepository + PostRepository + 'static,
{
    let logger = Arc::new(StubLogger::default());
    let state = AppState::new(
        store,
        Arc::new(SequentialIdGenerator::default()),
        logger.clone(),
        build(),
    );

    TestApp {
        router: hashbang::routes::create_router().with_state(state),
        logger,
    }
}

pub fn memory_app() -> (TestApp, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with(store.clone()), store)
}

pub fn failing_app() -> (TestApp, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    (app_with(store.clone()), store)
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let body = match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub fn logged_errors(&self) -> Vec<String> {
        self.logger.errors.lock().clone()
    }
}

pub fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
