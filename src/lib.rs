//! Libris Library Management Service
//!
//! A Rust implementation of the Libris library-management server, providing
//! a REST JSON API over a book catalog, a category catalog, and a user
//! directory. Each category carries a cached count of its books, kept
//! consistent by the catalog service.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
