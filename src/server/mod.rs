use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::storage::MemoryStore;

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Server state
///
/// The store is built before the server starts and shared read-only by every
/// request handler.
pub struct AppState {
    pub store: MemoryStore,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

/// Build the API router. When `static_dir` is set, unmatched paths are served
/// from it so the front end and the API share one origin.
pub fn build_router(state: Arc<AppState>, static_dir: Option<&std::path::Path>) -> Router {
    let api = Router::new()
        .route("/api/articles", get(routes::list_articles))
        .route("/api/articles/{slug}", get(routes::get_article))
        .route("/api/articles/{slug}/comments", get(routes::get_article_comments))
        .route("/api/articles/{slug}/related", get(routes::get_related_articles))
        .route("/api/categories", get(routes::list_categories))
        .route("/api/categories/{slug}", get(routes::get_category))
        .route("/api/categories/{slug}/articles", get(routes::get_category_articles))
        .route("/api/authors", get(routes::list_authors))
        .route("/api/authors/{id}", get(routes::get_author))
        .route("/api/authors/{id}/articles", get(routes::get_author_articles))
        .route("/api/featured", get(routes::get_featured_article))
        .route("/api/search", get(routes::search))
        .route("/api/stats", get(routes::get_stats));

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(settings: ServerSettings, store: MemoryStore) -> anyhow::Result<()> {
    let state = AppState::new(store);
    let app = build_router(state, settings.static_dir.as_deref());

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
