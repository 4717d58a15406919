// Route table for the fxminer API

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/kaggle/test", get(handlers::kaggle_test))
        .route("/status", get(handlers::health_check))
}
