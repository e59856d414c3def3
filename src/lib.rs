//! Library catalog
//!
//! Server-rendered screens for browsing and maintaining a library catalog:
//! book copies (instances) and authors, stored in PostgreSQL or in memory.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub views: Arc<dyn views::ViewRenderer>,
}
