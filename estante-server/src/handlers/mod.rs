//! Request handlers

mod jobs;
mod library;
mod reader;
mod session;
mod sync;

pub use jobs::*;
pub use library::*;
pub use reader::*;
pub use session::*;
pub use sync::*;

use axum::http::StatusCode;
use axum::Json;
use estante_core::StoreError;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Map a store rejection to an HTTP status and message
///
/// Unknown references are 404, conflicts with current state 409, malformed
/// input 400. The message is the error's display text.
pub(crate) fn reject(err: StoreError) -> (StatusCode, String) {
    let status = match err {
        StoreError::UnknownBook { .. } => StatusCode::NOT_FOUND,
        StoreError::DuplicateBook { .. } | StoreError::ReaderNeedsBook => StatusCode::CONFLICT,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}
