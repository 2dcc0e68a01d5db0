//! Buku book catalog
//!
//! An in-memory book catalog exposed through a REST JSON API with a small
//! browser client, plus an interactive console program over its own catalog.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use catalog::BookCatalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around a catalog
    pub fn new(config: AppConfig, catalog: BookCatalog) -> Self {
        let repository = repository::Repository::new(catalog);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
