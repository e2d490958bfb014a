use std::future::Future;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;
use crate::error::{MigrationError, StoreError, StoreResult};
use crate::model::{Id, NamedTagList, Post};
use crate::store::migrations::{run_migrations, MIGRATIONS};
use crate::store::traits::{NamedTagListRepository, PostRepository};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    deadline: Duration,
}

#[derive(Debug, sqlx::FromRow)]
struct NamedTagListRow {
    id: String,
    name: Option<String>,
    tags: Option<Vec<String>>,
}

impl From<NamedTagListRow> for NamedTagList {
    fn from(row: NamedTagListRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            tags: row.tags.unwrap_or_default(),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: String,
    image_uri: Option<String>,
    tags: Option<Vec<String>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            image_uri: row.image_uri.unwrap_or_default(),
            tags: row.tags.unwrap_or_default(),
        }
    }
}

impl PostgresStore {
    /// Create a new PostgreSQL store with a bounded connection pool
    pub async fn new(database_url: &str, config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(database_url)
            .await?;

        Ok(Self::from_pool(
            pool,
            Duration::from_secs(config.statement_timeout_secs),
        ))
    }

    pub fn from_pool(pool: PgPool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    /// Run database migrations on a single dedicated connection
    pub async fn migrate(&self) -> Result<i32, MigrationError> {
        let mut connection = self.pool.acquire().await.map_err(MigrationError::Connect)?;
        run_migrations(&mut *connection, MIGRATIONS).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn bounded<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout(self.deadline)),
        }
    }
}

#[async_trait::async_trait]
impl NamedTagListRepository for PostgresStore {
    async fn find_all(&self, buckets: &[String]) -> StoreResult<Vec<NamedTagList>> {
        if buckets.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<NamedTagListRow> = self
            .bounded(
                sqlx::query_as(
                    r#"
                    select "id"::text as "id", "name", "tags"
                    from named_tag_lists
                    where "bucket" = any($1)
                    order by "created_at", "id"
                    "#,
                )
                .bind(buckets)
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(rows.into_iter().map(NamedTagList::from).collect())
    }

    async fn create(&self, bucket: &str, named_tag_list: &NamedTagList) -> StoreResult<()> {
        self.bounded(
            sqlx::query(
                r#"insert into named_tag_lists ("id", "name", "tags", "bucket") values ($1::uuid, $2, $3, $4)"#,
            )
            .bind(&named_tag_list.id)
            .bind(&named_tag_list.name)
            .bind(&named_tag_list.tags)
            .bind(bucket)
            .execute(&self.pool),
        )
        .await?;

        Ok(())
    }

    async fn replace_by_ids(&self, ids: &[Id], replacement: &NamedTagList) -> StoreResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        self.bounded(
            sqlx::query(
                r#"update named_tag_lists set "name" = $1, "tags" = $2 where "id" = any($3::uuid[])"#,
            )
            .bind(&replacement.name)
            .bind(&replacement.tags)
            .bind(ids)
            .execute(&self.pool),
        )
        .await?;

        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[Id]) -> StoreResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        self.bounded(
            sqlx::query(r#"delete from named_tag_lists where "id" = any($1::uuid[])"#)
                .bind(ids)
                .execute(&self.pool),
        )
        .await?;

        Ok(())
    }

    async fn delete_all(&self, buckets: &[String]) -> StoreResult<()> {
        if buckets.is_empty() {
            return Ok(());
        }

        self.bounded(
            sqlx::query(r#"delete from named_tag_lists where "bucket" = any($1)"#)
                .bind(buckets)
                .execute(&self.pool),
        )
        .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl PostRepository for PostgresStore {
    async fn find_all(&self) -> StoreResult<Vec<Post>> {
        let rows: Vec<PostRow> = self
            .bounded(
                sqlx::query_as(
                    r#"
                    select "id"::text as "id", "imageUri" as "image_uri", "tags"
                    from posts
                    order by "created_at", "id"
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn create(&self, post: &Post) -> StoreResult<()> {
        self.bounded(
            sqlx::query(r#"insert into posts ("id", "imageUri", "tags") values ($1::uuid, $2, $3)"#)
                .bind(&post.id)
                .bind(&post.image_uri)
                .bind(&post.tags)
                .execute(&self.pool),
        )
        .await?;

        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.bounded(sqlx::query("delete from posts").execute(&self.pool))
            .await?;

        Ok(())
    }
}
