//! HTTP surface - page, JSON API, static files

pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::db::ChallengeDb;
use crate::providers::ColorClient;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "sketchspark";

/// State shared across handlers. The store is read-only once seeding has
/// finished, so no outer lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<ChallengeDb>,
    pub color: ColorClient,
}

impl AppState {
    pub fn new(db: Arc<ChallengeDb>, color: ColorClient) -> Self {
        Self { db, color }
    }
}

/// Create the service router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(routes::index))
        // API endpoints
        .route("/api/random-color", get(routes::api_random_color))
        .route("/api/random-word", get(routes::api_random_word))
        .route("/api/random-challenge", get(routes::api_random_challenge))
        .route("/api/random-all", get(routes::api_random_all))
        .route("/api/health", get(routes::api_health))
        // Static files
        .nest_service("/static", tower_http::services::ServeDir::new("static"))
        .with_state(state)
}
