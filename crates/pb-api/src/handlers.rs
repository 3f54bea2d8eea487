//! # pb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the `PostService`.

use actix_web::{web, HttpResponse, Responder};
use pb_core::error::AppError;
use pb_core::models::{NewPost, PostId, PostPatch};
use pb_core::PostService;
use serde::Deserialize;

use crate::error::ApiError;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub posts: PostService,
}

/// Body of `POST /posts`. Every field is required; they are optional here
/// only so a missing field yields a precise validation message.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn into_new_post(self) -> Result<NewPost, AppError> {
        match (self.author, self.title, self.content) {
            (Some(author), Some(title), Some(content)) => Ok(NewPost {
                author,
                title,
                content,
            }),
            (author, title, content) => {
                let missing: Vec<&str> = [
                    ("author", author.is_none()),
                    ("title", title.is_none()),
                    ("content", content.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(AppError::ValidationError(format!(
                    "missing required field(s): {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

pub async fn list_posts(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let posts = data.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

pub async fn get_post(
    data: web::Data<AppState>,
    path: web::Path<PostId>,
) -> Result<HttpResponse, ApiError> {
    let post = data.posts.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn create_post(
    data: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_post = body.into_inner().into_new_post()?;
    let post = data.posts.create_post(new_post).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Absent and empty fields leave the stored value unchanged.
/// A request without a body is treated as `{}`.
pub async fn update_post(
    data: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let patch = parse_patch(&body)?;
    let post = data.posts.update_post(path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

fn parse_patch(body: &[u8]) -> Result<PostPatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PostPatch::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| ApiError::BadRequest(format!("Json deserialize error: {err}")))
}

/// Responds with the post as it was just before removal.
pub async fn delete_post(
    data: web::Data<AppState>,
    path: web::Path<PostId>,
) -> Result<HttpResponse, ApiError> {
    let post = data.posts.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// A simple homepage handler for "/"
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Welcome to Post-Board! Try GET /posts")
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
