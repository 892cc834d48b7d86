//! Session handlers: login, logout, snapshot, view and theme switching

use super::reject;
use crate::state::SessionState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use estante_core::{AppState, GlobalTheme, Intent, ReaderSettings, User, View};
use serde::{Deserialize, Serialize};

/// Login request: a pre-validated identity, never credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,

    /// Display name; derived from the email when absent
    pub name: Option<String>,
}

/// Session-level snapshot: everything but the book collection itself
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub user: Option<User>,
    pub view: View,
    pub current_book_id: Option<String>,
    pub book_count: usize,
    pub reader_settings: ReaderSettings,
    pub global_theme: GlobalTheme,
}

impl From<&AppState> for StateResponse {
    fn from(state: &AppState) -> Self {
        Self {
            user: state.user.clone(),
            view: state.view,
            current_book_id: state.current_book_id.as_ref().map(|id| id.to_string()),
            book_count: state.library.len(),
            reader_settings: state.reader_settings,
            global_theme: state.global_theme,
        }
    }
}

/// Sign in and land in the library view
pub async fn login(
    State(state): State<SessionState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<StateResponse>, (StatusCode, String)> {
    if request.email.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Email must not be empty".to_string()));
    }
    let user = match request.name {
        Some(name) => User::new(request.email, name),
        None => User::from_email(request.email),
    };
    let next = state.dispatch(Intent::Login { user }).await.map_err(reject)?;
    Ok(Json(StateResponse::from(next.as_ref())))
}

/// Sign out, back to the login view
pub async fn logout(
    State(state): State<SessionState>,
) -> Result<Json<StateResponse>, (StatusCode, String)> {
    let next = state.dispatch(Intent::Logout).await.map_err(reject)?;
    Ok(Json(StateResponse::from(next.as_ref())))
}

/// Current session snapshot
pub async fn get_state(State(state): State<SessionState>) -> Json<StateResponse> {
    let snapshot = state.snapshot().await;
    Json(StateResponse::from(snapshot.as_ref()))
}

/// View switch request
#[derive(Debug, Deserialize)]
pub struct SetViewRequest {
    pub view: View,
}

/// Switch the top-level view
pub async fn set_view(
    State(state): State<SessionState>,
    Json(request): Json<SetViewRequest>,
) -> Result<Json<StateResponse>, (StatusCode, String)> {
    let next = state
        .dispatch(Intent::SetView { view: request.view })
        .await
        .map_err(reject)?;
    Ok(Json(StateResponse::from(next.as_ref())))
}

/// Flip the application-wide theme
pub async fn toggle_theme(
    State(state): State<SessionState>,
) -> Result<Json<StateResponse>, (StatusCode, String)> {
    let next = state
        .dispatch(Intent::ToggleGlobalTheme)
        .await
        .map_err(reject)?;
    Ok(Json(StateResponse::from(next.as_ref())))
}
