//! Versioned schema migrations.
//!
//! The applied version lives in the `metadata` table under `schemaVersion`.
//! Migrations with an index at or below the stored version are skipped; the
//! rest run in ascending order and the counter is advanced once at the end.
//! A failure part-way leaves the counter untouched, so every statement here
//! must be safe to run again.

use sqlx::PgConnection;

use crate::error::MigrationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub index: i32,
    pub statement: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        index: 1,
        statement: r#"create table if not exists posts ("imageUri" text, "tags" text[])"#,
    },
    Migration {
        index: 2,
        statement: r#"alter table posts add column if not exists "id" uuid primary key"#,
    },
    Migration {
        index: 3,
        statement: r#"alter table posts add column if not exists "created_at" timestamptz not null default clock_timestamp()"#,
    },
    Migration {
        index: 4,
        statement: r#"create table if not exists named_tag_lists ("id" uuid primary key, "name" text, "tags" text[])"#,
    },
    Migration {
        index: 5,
        statement: r#"alter table named_tag_lists add column if not exists "bucket" text not null default 'default'"#,
    },
    Migration {
        index: 6,
        statement: r#"create index if not exists named_tag_lists_bucket_idx on named_tag_lists ("bucket")"#,
    },
    Migration {
        index: 7,
        statement: r#"alter table named_tag_lists add column if not exists "created_at" timestamptz not null default clock_timestamp()"#,
    },
];

/// Returns the latest migration index known by this binary.
pub fn latest_version(migrations: &[Migration]) -> i32 {
    migrations.iter().map(|m| m.index).max().unwrap_or(0)
}

/// Storage the migration runner operates on.
#[async_trait::async_trait]
pub trait MigrationTarget: Send {
    /// Create the metadata table and seed `schemaVersion = 0` if it is absent
    async fn bootstrap(&mut self) -> Result<(), sqlx::Error>;
    async fn schema_version(&mut self) -> Result<i32, sqlx::Error>;
    async fn execute(&mut self, statement: &str) -> Result<(), sqlx::Error>;
    async fn set_schema_version(&mut self, version: i32) -> Result<(), sqlx::Error>;
}

/// Bring `target` up to date with `migrations`, returning the resulting
/// schema version.
pub async fn run_migrations<T>(
    target: &mut T,
    migrations: &[Migration],
) -> Result<i32, MigrationError>
where
    T: MigrationTarget + ?Sized,
{
    target.bootstrap().await.map_err(MigrationError::Bootstrap)?;

    let current = target
        .schema_version()
        .await
        .map_err(MigrationError::ReadVersion)?;

    let mut pending: Vec<&Migration> = migrations.iter().filter(|m| m.index > current).collect();
    pending.sort_by_key(|m| m.index);

    if pending.is_empty() {
        let latest = latest_version(migrations);
        if current > latest {
            log::warn!(
                "Schema version {} is newer than the latest known migration {}",
                current,
                latest
            );
        }
        return Ok(current);
    }

    let target_version = pending.last().map_or(current, |m| m.index);

    for migration in &pending {
        log::info!(
            "Running migration {}: {}",
            migration.index,
            migration.statement
        );
        target
            .execute(migration.statement)
            .await
            .map_err(|source| MigrationError::Apply {
                index: migration.index,
                source,
            })?;
    }

    target
        .set_schema_version(target_version)
        .await
        .map_err(|source| MigrationError::RecordVersion {
            version: target_version,
            source,
        })?;

    Ok(target_version)
}

#[async_trait::async_trait]
impl MigrationTarget for PgConnection {
    async fn bootstrap(&mut self) -> Result<(), sqlx::Error> {
        sqlx::query(r#"create table if not exists metadata ("name" text primary key, "value" int)"#)
            .execute(&mut *self)
            .await?;
        sqlx::query(
            r#"insert into metadata ("name", "value") values ('schemaVersion', 0) on conflict do nothing"#,
        )
        .execute(&mut *self)
        .await?;
        Ok(())
    }

    async fn schema_version(&mut self) -> Result<i32, sqlx::Error> {
        let version: Option<i32> =
            sqlx::query_scalar(r#"select "value" from metadata where "name" = 'schemaVersion'"#)
                .fetch_one(&mut *self)
                .await?;
        Ok(version.unwrap_or(0))
    }

    async fn execute(&mut self, statement: &str) -> Result<(), sqlx::Error> {
        sqlx::query(statement).execute(&mut *self).await?;
        Ok(())
    }

    async fn set_schema_version(&mut self, version: i32) -> Result<(), sqlx::Error> {
        sqlx::query(r#"update metadata set "value" = $1 where "name" = 'schemaVersion'"#)
            .bind(version)
            .execute(&mut *self)
            .await?;
        Ok(())
    }
}
