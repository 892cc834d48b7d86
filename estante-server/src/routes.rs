//! API routes

use crate::handlers;
use crate::state::SessionState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(state: SessionState) -> Router {
    // Configure CORS based on environment
    // ESTANTE_CORS_ORIGINS can be comma-separated list of origins, or "*" for any
    let cors = match std::env::var("ESTANTE_CORS_ORIGINS").ok() {
        Some(origins) if origins == "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => {
            // Default: allow localhost origins for development
            CorsLayer::new()
                .allow_origin(AllowOrigin::list([
                    "http://localhost:3000".parse().unwrap(),
                    "http://localhost:5173".parse().unwrap(),
                    "http://127.0.0.1:3000".parse().unwrap(),
                    "http://127.0.0.1:5173".parse().unwrap(),
                ]))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let api_routes = Router::new()
        // Session endpoints
        .route("/session", post(handlers::login).delete(handlers::logout))
        .route("/state", get(handlers::get_state))
        .route("/view", put(handlers::set_view))
        .route("/theme/toggle", post(handlers::toggle_theme))
        // Library endpoints
        .route(
            "/library",
            get(handlers::list_books)
                .post(handlers::add_book)
                .delete(handlers::delete_all_books),
        )
        .route(
            "/library/:id",
            get(handlers::get_book).delete(handlers::delete_book),
        )
        .route("/library/:id/open", post(handlers::open_book))
        .route("/library/:id/progress", put(handlers::update_progress))
        // Job endpoints
        .route("/library/:id/translate", post(handlers::start_translation))
        .route(
            "/library/:id/translate/cancel",
            post(handlers::cancel_translation),
        )
        .route("/library/:id/export", post(handlers::start_export))
        // Reader endpoints
        .route("/reader", get(handlers::current_chapter))
        .route("/reader/close", post(handlers::close_reader))
        .route("/reader/next", post(handlers::next_chapter))
        .route("/reader/previous", post(handlers::previous_chapter))
        .route("/reader/goto", post(handlers::goto_chapter))
        .route("/reader/settings", put(handlers::update_settings))
        // SSE endpoint
        .route("/events", get(handlers::event_stream));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
