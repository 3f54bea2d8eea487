//! # pb-db-memory
//!
//! Process-local implementation of `PostRepo`.
//! Everything lives in an ordered map and is lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use pb_core::models::{NewPost, Post, PostId};
use pb_core::traits::PostRepo;
use tokio::sync::RwLock;

struct Table {
    rows: BTreeMap<PostId, Post>,
    /// Next id to hand out. Only ever grows, so deleted ids are never reused.
    next_id: PostId,
}

pub struct InMemoryPostRepo {
    table: RwLock<Table>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Starts from an existing set of posts; new ids continue after the highest one.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let rows: BTreeMap<PostId, Post> = posts.into_iter().map(|p| (p.id, p)).collect();
        let next_id = rows.keys().next_back().map_or(1, |id| id + 1);
        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }
}

impl Default for InMemoryPostRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Three sample posts for demo deployments.
pub fn demo_posts() -> Vec<Post> {
    (1..=3)
        .map(|n| Post {
            id: n,
            author: format!("author{n}"),
            title: format!("Sample post {n}"),
            content: "Welcome to Post-Board.".to_string(),
            like_count: 1,
            comment_count: 1,
        })
        .collect()
}

#[async_trait]
impl PostRepo for InMemoryPostRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Post>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, post: NewPost) -> anyhow::Result<Post> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let post = post.into_post(id);
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn save(&self, post: Post) -> anyhow::Result<Option<Post>> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&post.id) else {
            return Ok(None);
        };
        // Counters are not writable through save.
        row.author = post.author;
        row.title = post.title;
        row.content = post.content;
        Ok(Some(row.clone()))
    }

    async fn delete_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>> {
        let removed = self.table.write().await.rows.remove(&id);
        if removed.is_some() {
            log::debug!("removed post {} from memory store", id);
        }
        Ok(removed)
    }
}
