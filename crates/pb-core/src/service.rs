//! # PostService
//!
//! The five post operations, written against the `PostRepo` port.
//! Absent records surface as `AppError::NotFound`; backend failures are
//! wrapped in `AppError::Storage` without retry.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{NewPost, Post, PostId, PostPatch};
use crate::traits::PostRepo;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepo>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_post(&self, id: PostId) -> Result<Post> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            log::debug!("post {} not found", id);
            AppError::post_not_found(id)
        })
    }

    pub async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        let post = self.repo.insert(new_post).await?;
        log::info!("created post {}", post.id);
        Ok(post)
    }

    /// Applies `patch` to the post with `id`.
    ///
    /// A patch that changes nothing returns the stored record without a write.
    pub async fn update_post(&self, id: PostId, patch: PostPatch) -> Result<Post> {
        let mut post = self.get_post(id).await?;
        if !patch.apply(&mut post) {
            return Ok(post);
        }

        // The record can vanish between the read and the write.
        let saved = self
            .repo
            .save(post)
            .await?
            .ok_or_else(|| AppError::post_not_found(id))?;
        log::info!("updated post {}", id);
        Ok(saved)
    }

    pub async fn delete_post(&self, id: PostId) -> Result<Post> {
        let removed = self.repo.delete_by_id(id).await?.ok_or_else(|| {
            log::debug!("post {} not found", id);
            AppError::post_not_found(id)
        })?;
        log::info!("deleted post {}", id);
        Ok(removed)
    }
}
