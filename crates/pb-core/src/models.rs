//! # Domain Models
//!
//! The single entity of Post-Board and the payloads used to create and edit it.
//! Ids are integers assigned by the storage backend, never by callers.

use serde::{Deserialize, Serialize};

/// Identifier of a stored post.
pub type PostId = i64;

/// A user-authored item with engagement counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    /// Always 0 at creation; no operation here changes it.
    pub like_count: i64,
    pub comment_count: i64,
}

/// Fields supplied when creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Builds the stored record for a freshly assigned id.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            like_count: 0,
            comment_count: 0,
        }
    }
}

/// A partial edit of a post's text fields.
///
/// `None` and `Some("")` both leave the stored field untouched, so an edit
/// can never blank out a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    /// Applies every present, non-empty field to `post`.
    /// Returns `true` if any field was written.
    pub fn apply(&self, post: &mut Post) -> bool {
        let mut changed = false;
        for (value, slot) in [
            (&self.title, &mut post.title),
            (&self.content, &mut post.content),
            (&self.author, &mut post.author),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                if *slot != value {
                    *slot = value.to_string();
                    changed = true;
                }
            }
        }
        changed
    }
}
