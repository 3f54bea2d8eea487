//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use async_trait::async_trait;
use crate::models::{NewPost, Post, PostId};

/// Data persistence contract for posts.
///
/// Backends differ only in durability; every method must behave the same
/// way for both the persistent and the transient plugin.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostRepo: Send + Sync {
    /// All posts, ascending by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Post>>;

    async fn find_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>>;

    /// Stores a new post. The backend assigns the id and zeroes the counters.
    async fn insert(&self, post: NewPost) -> anyhow::Result<Post>;

    /// Overwrites the text fields of an existing post.
    /// Returns `None` if no record has `post.id`.
    async fn save(&self, post: Post) -> anyhow::Result<Option<Post>>;

    /// Removes a post permanently, returning it as it was before removal.
    async fn delete_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>>;
}
