pub mod error;
pub mod extract;
pub mod frontend;
pub mod health;
pub mod movies;
pub mod response;
pub mod session;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::database::Database;
use crate::models::Clock;
use crate::presentation::{HtmlRenderer, Renderer};
use crate::services::{CatalogService, FlashStore};

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub catalog: Arc<CatalogService>,
    pub flash: FlashStore,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(database: Database, clock: Arc<dyn Clock>, flash: FlashStore) -> Self {
        let catalog = CatalogService::new(Arc::new(database.repository().clone()), clock);
        Self {
            database,
            catalog: Arc::new(catalog),
            flash,
            renderer: Arc::new(HtmlRenderer::new()),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }
}

/// 构建全部路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(frontend::home))
        // Frontend
        .route("/frontend/", get(frontend::index))
        .route("/update_form/", get(frontend::update_form))
        // Movie operations
        .route("/add/", post(movies::add_movie))
        .route("/add_default/", get(movies::add_default_movie))
        .route("/update/", post(movies::update_movie))
        .route("/view/", get(movies::view_movie))
        .route("/view_all/", get(movies::view_all_movies))
        .route("/list/", get(movies::list_movies))
        .route("/delete/", get(movies::delete_movie))
        // Health
        .route("/api/health", get(health::health_check))
        .fallback(frontend::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
