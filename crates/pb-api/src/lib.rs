//! # pb-api
//!
//! The web routing and orchestration layer for Post-Board.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use error::ApiError;
pub use handlers::AppState;

/// Configures the root banner, the health probe and the `/posts` scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/posts")
                // Non-integer ids and bad bodies become 400s with a JSON error body
                .app_data(error::path_config())
                .app_data(error::json_config())
                .route("", web::get().to(handlers::list_posts))
                .route("", web::post().to(handlers::create_post))
                .route("/{id}", web::get().to(handlers::get_post))
                .route("/{id}", web::patch().to(handlers::update_post))
                .route("/{id}", web::delete().to(handlers::delete_post)),
        );
}
