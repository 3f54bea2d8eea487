//! # Post-Board Binary
//!
//! The entry point that assembles the application from configuration and
//! compile-time features.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use configs::{ConfigError, Settings, StorageBackend, StorageSettings};
use pb_api::{configure_routes, middleware, AppState};
use pb_core::{PostRepo, PostService};

// Feature-gated imports: each storage plugin is compiled only when enabled
#[cfg(feature = "db-sqlite")]
use pb_db_sqlite::SqlitePostRepo;

#[cfg(feature = "db-memory")]
use pb_db_memory::{demo_posts, InMemoryPostRepo};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(settings.log_level.as_str()),
    );
    log::debug!("{:?}", settings);

    // 1. Initialize the configured storage implementation
    let repo = build_repo(&settings.storage).await?;

    // 2. Wrap in AppState (dynamic dispatch over the storage port)
    let state = web::Data::new(AppState {
        posts: PostService::new(repo),
    });

    let (host, port) = settings.bind_address();
    log::info!(
        "Post-Board starting on http://{}:{} with {} storage",
        host,
        port,
        settings.storage.backend
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .wrap(middleware::cors_policy())
            .configure(configure_routes)
    })
    .bind((host, port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await?;

    Ok(())
}

async fn build_repo(storage: &StorageSettings) -> anyhow::Result<Arc<dyn PostRepo>> {
    match storage.backend {
        #[cfg(feature = "db-sqlite")]
        StorageBackend::Sqlite => {
            use secrecy::ExposeSecret;

            if storage.seed_demo_posts {
                log::warn!("storage.seed_demo_posts is ignored by the sqlite backend");
            }
            let repo = SqlitePostRepo::connect(
                storage.database_url.expose_secret(),
                storage.max_connections,
            )
            .await
            .context("failed to initialize sqlite storage")?;
            Ok(Arc::new(repo))
        }
        #[cfg(feature = "db-memory")]
        StorageBackend::Memory => {
            let repo = if storage.seed_demo_posts {
                InMemoryPostRepo::with_posts(demo_posts())
            } else {
                InMemoryPostRepo::new()
            };
            Ok(Arc::new(repo))
        }
        #[allow(unreachable_patterns)]
        other => Err(ConfigError::BackendUnavailable(other).into()),
    }
}
