//! Translation and export job handlers
//!
//! Jobs run detached from the request that started them and report through
//! channels; a forwarder task turns reports into intents, so the store stays
//! the only writer of state.

use crate::state::{SessionEvent, SessionState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estante_core::tasks::{
    export_file_name, spawn_export, spawn_translation, validate_export, ExportEvent, ExportFormat,
    ExportRequest, ExportVariant, TranslationEvent, TranslationRequest,
};
use estante_core::{BookId, Intent, Language};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Translation start request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// Target language code from the supported catalog
    pub language: String,
}

/// Translation start response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub book_id: String,
    pub language: String,
    pub language_name: String,
    pub message: String,
}

/// Start translating a book into a target language
pub async fn start_translation(
    State(state): State<SessionState>,
    Path(id): Path<String>,
    Json(request): Json<TranslateRequest>,
) -> Result<(StatusCode, Json<TranslateResponse>), (StatusCode, String)> {
    let id = BookId::from(id);
    let snapshot = state.snapshot().await;
    let book = snapshot
        .library
        .get(&id)
        .ok_or((StatusCode::NOT_FOUND, format!("Unknown book: {}", id)))?;
    let language = Language::by_code(&request.language).ok_or((
        StatusCode::BAD_REQUEST,
        format!("Unsupported language: {}", request.language),
    ))?;
    if book.translation(language.code).is_some_and(|t| t.is_complete) {
        return Err((
            StatusCode::CONFLICT,
            format!("Translation to {} is already complete", language.name),
        ));
    }

    {
        let mut jobs = state.jobs.lock().await;
        if jobs.translation_running(&id, language.code) {
            return Err((
                StatusCode::CONFLICT,
                format!("Translation to {} is already underway", language.name),
            ));
        }

        let (tx, rx) = mpsc::channel(16);
        let handle = spawn_translation(
            TranslationRequest {
                book: id.clone(),
                language: language.code.to_string(),
                chapters: Arc::clone(&book.chapters),
            },
            Arc::clone(&state.engine),
            tx,
        );
        jobs.insert_translation(id.clone(), language.code.to_string(), handle);
        tokio::spawn(forward_translation_events(state.clone(), rx));
    }

    tracing::info!(book = %id, language = language.code, "Translation started");
    Ok((
        StatusCode::ACCEPTED,
        Json(TranslateResponse {
            book_id: id.to_string(),
            language: language.code.to_string(),
            language_name: language.name.to_string(),
            message: "Translation started".to_string(),
        }),
    ))
}

/// Turn job reports into intents and session events until the job ends
async fn forward_translation_events(
    state: SessionState,
    mut events: mpsc::Receiver<TranslationEvent>,
) {
    while let Some(event) = events.recv().await {
        match event {
            TranslationEvent::Progress {
                book,
                language,
                progress,
            } => {
                let accepted = state
                    .dispatch(Intent::UpdateTranslationProgress {
                        id: book.clone(),
                        language: language.clone(),
                        progress,
                        complete: false,
                    })
                    .await;
                match accepted {
                    Ok(_) => state.broadcast(SessionEvent::TranslationProgress {
                        book_id: book.to_string(),
                        language,
                        progress,
                        complete: false,
                    }),
                    Err(err) => {
                        // The book vanished mid-job; stop translating it
                        tracing::warn!(book = %book, "Translation report rejected: {}", err);
                        state.jobs.lock().await.cancel_translation(&book, &language);
                        state.broadcast(SessionEvent::Error {
                            message: format!("Translation of {} stopped: {}", book, err),
                        });
                    }
                }
            }
            TranslationEvent::Completed { book, language } => {
                let accepted = state
                    .dispatch(Intent::UpdateTranslationProgress {
                        id: book.clone(),
                        language: language.clone(),
                        progress: 100.0,
                        complete: true,
                    })
                    .await;
                match accepted {
                    Ok(_) => {
                        tracing::info!(book = %book, language = %language, "Translation complete");
                        state.broadcast(SessionEvent::TranslationProgress {
                            book_id: book.to_string(),
                            language: language.clone(),
                            progress: 100.0,
                            complete: true,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(book = %book, "Completion report rejected: {}", err);
                        state.broadcast(SessionEvent::Error {
                            message: format!("Translation of {} stopped: {}", book, err),
                        });
                    }
                }
                state.jobs.lock().await.remove_translation(&book, &language);
            }
            TranslationEvent::Failed {
                book,
                language,
                reason,
            } => {
                tracing::warn!(
                    book = %book,
                    language = %language,
                    "Translation failed: {}", reason
                );
                state.broadcast(SessionEvent::TranslationFailed {
                    book_id: book.to_string(),
                    language: language.clone(),
                    reason,
                });
                state.jobs.lock().await.remove_translation(&book, &language);
            }
            TranslationEvent::Cancelled { book, language } => {
                tracing::info!(book = %book, language = %language, "Translation cancelled");
                state.broadcast(SessionEvent::TranslationCancelled {
                    book_id: book.to_string(),
                    language: language.clone(),
                });
                state.jobs.lock().await.remove_translation(&book, &language);
            }
        }
    }
}

/// Translation cancel request
#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub language: String,
}

/// Translation cancel response
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub book_id: String,
    pub language: String,
    pub message: String,
}

/// Ask a running translation job to stop
pub async fn cancel_translation(
    State(state): State<SessionState>,
    Path(id): Path<String>,
    Json(request): Json<CancelRequest>,
) -> Result<(StatusCode, Json<CancelResponse>), (StatusCode, String)> {
    let id = BookId::from(id);
    let mut jobs = state.jobs.lock().await;
    if !jobs.cancel_translation(&id, &request.language) {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No translation to {} underway", request.language),
        ));
    }
    Ok((
        StatusCode::ACCEPTED,
        Json(CancelResponse {
            book_id: id.to_string(),
            language: request.language,
            message: "Cancellation requested".to_string(),
        }),
    ))
}

/// Export request body: which text to export and in what container
#[derive(Debug, Deserialize)]
pub struct ExportRequestBody {
    #[serde(flatten)]
    pub variant: ExportVariant,

    #[serde(default = "default_format")]
    pub format: ExportFormat,
}

fn default_format() -> ExportFormat {
    ExportFormat::Epub
}

/// Export start response; the file name is fixed up front
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub book_id: String,
    pub file_name: String,
    pub format: ExportFormat,
    pub message: String,
}

/// Start exporting a book
pub async fn start_export(
    State(state): State<SessionState>,
    Path(id): Path<String>,
    Json(request): Json<ExportRequestBody>,
) -> Result<(StatusCode, Json<ExportResponse>), (StatusCode, String)> {
    let id = BookId::from(id);
    let snapshot = state.snapshot().await;
    let book = snapshot
        .library
        .get(&id)
        .ok_or((StatusCode::NOT_FOUND, format!("Unknown book: {}", id)))?;
    validate_export(book, &request.variant).map_err(|e| (StatusCode::CONFLICT, e.to_string()))?;

    let file_name = export_file_name(&book.title, &request.variant, request.format);
    let (tx, rx) = mpsc::channel(4);
    // Fire and forget: dropping the handle leaves the job running
    let _handle = spawn_export(
        ExportRequest {
            book: id.clone(),
            title: book.title.clone(),
            variant: request.variant,
            format: request.format,
        },
        state.export_pace,
        tx,
    );
    tokio::spawn(forward_export_events(state.clone(), rx));

    tracing::info!(book = %id, file = %file_name, "Export started");
    Ok((
        StatusCode::ACCEPTED,
        Json(ExportResponse {
            book_id: id.to_string(),
            file_name,
            format: request.format,
            message: "Export started".to_string(),
        }),
    ))
}

/// Relay export completion to connected clients
async fn forward_export_events(state: SessionState, mut events: mpsc::Receiver<ExportEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            ExportEvent::Completed {
                book,
                file_name,
                format,
            } => {
                tracing::info!(book = %book, file = %file_name, "Export ready");
                state.broadcast(SessionEvent::ExportReady {
                    book_id: book.to_string(),
                    file_name,
                    format: format.extension().to_string(),
                });
            }
            ExportEvent::Cancelled { book } => {
                tracing::debug!(book = %book, "Export cancelled");
            }
        }
    }
}
