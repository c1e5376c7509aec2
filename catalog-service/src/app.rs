use crate::config::Config;
use crate::routes::{
    books::{create_book, delete_book, list_books, update_book},
    health::health_check,
};
use crate::services::store::BookRepository;
use crate::services::uploads::UploadSink;
use crate::utils::file::UPLOADS_ROUTE;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub type Store = Arc<dyn BookRepository + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub uploads: Arc<UploadSink>,
}

impl AppState {
    pub fn new(store: Store, config: &Config) -> Self {
        Self {
            store,
            uploads: Arc::new(UploadSink::new(config.upload_dir.clone())),
        }
    }
}

pub fn router(state: AppState, config: &Config) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    Router::new()
        .route("/status", get(health_check))
        .route(
            "/books",
            get(list_books)
                .post(create_book)
                .put(update_book)
                .delete(delete_book),
        )
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .with_state(state)
}
