//! Shared fixtures: every suite runs once per storage backend.

use std::sync::Arc;

use pb_core::PostRepo;
use pb_db_memory::InMemoryPostRepo;
use pb_db_sqlite::SqlitePostRepo;

/// A fresh, empty instance of each backend, labelled for assertion messages.
pub async fn empty_backends() -> Vec<(&'static str, Arc<dyn PostRepo>)> {
    let sqlite = SqlitePostRepo::new("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open");

    vec![
        ("memory", Arc::new(InMemoryPostRepo::new()) as Arc<dyn PostRepo>),
        ("sqlite", Arc::new(sqlite) as Arc<dyn PostRepo>),
    ]
}
