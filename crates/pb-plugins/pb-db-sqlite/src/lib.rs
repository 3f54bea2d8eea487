//! # pb-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite `posts` table
//! and the `pb-core` domain models.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use pb_core::models::{NewPost, Post, PostId};
use pb_core::traits::PostRepo;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Development-grade schema sync: creates the table if it is missing and
/// never alters an existing one.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS posts (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    author        TEXT    NOT NULL,
    title         TEXT    NOT NULL,
    content       TEXT    NOT NULL,
    like_count    INTEGER NOT NULL DEFAULT 0,
    comment_count INTEGER NOT NULL DEFAULT 0
)";

const COLUMNS: &str = "id, author, title, content, like_count, comment_count";

pub struct SqlitePostRepo {
    pool: SqlitePool,
}

impl SqlitePostRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        Self::connect(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Opens (or creates) the database at `database_url` and syncs the schema.
    ///
    /// In-memory databases live only as long as their connection, so they
    /// are pinned to a single connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid sqlite url {database_url}"))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("failed to open sqlite database")?;
        log::info!("connected to sqlite database");

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and syncs the schema on it.
    pub async fn from_pool(pool: SqlitePool) -> anyhow::Result<Self> {
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .context("failed to sync posts schema")?;
        log::info!("posts schema synchronized");
        Ok(Self { pool })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn row_to_post(row: &SqliteRow) -> sqlx::Result<Post> {
    Ok(Post {
        id: row.try_get("id")?,
        author: row.try_get("author")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        like_count: row.try_get("like_count")?,
        comment_count: row.try_get("comment_count")?,
    })
}

#[async_trait]
impl PostRepo for SqlitePostRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM posts ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_post).collect::<sqlx::Result<_>>()?)
    }

    async fn find_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM posts WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_post).transpose()?)
    }

    /// Id assignment is delegated to AUTOINCREMENT, which never hands out
    /// the id of a deleted row again.
    async fn insert(&self, post: NewPost) -> anyhow::Result<Post> {
        let row = sqlx::query(&format!(
            "INSERT INTO posts (author, title, content, like_count, comment_count) \
             VALUES (?, ?, ?, 0, 0) RETURNING {COLUMNS}"
        ))
        .bind(post.author)
        .bind(post.title)
        .bind(post.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_post(&row)?)
    }

    async fn save(&self, post: Post) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query(&format!(
            "UPDATE posts SET author = ?, title = ?, content = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(post.author)
        .bind(post.title)
        .bind(post.content)
        .bind(post.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_post).transpose()?)
    }

    async fn delete_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query(&format!("DELETE FROM posts WHERE id = ? RETURNING {COLUMNS}"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_post).transpose()?)
    }
}
