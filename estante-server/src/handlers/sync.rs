//! Server-Sent Events handler for real-time updates

use crate::state::{SessionEvent, SessionState};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// SSE endpoint for real-time updates
pub async fn event_stream(
    State(state): State<SessionState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx);

    let event_stream = stream.filter_map(|result| {
        match result {
            Ok(event) => {
                let (event_type, data) = match event {
                    SessionEvent::StateChanged { intent } => (
                        "state_changed",
                        serde_json::json!({ "intent": intent }).to_string(),
                    ),
                    SessionEvent::TranslationProgress {
                        book_id,
                        language,
                        progress,
                        complete,
                    } => (
                        "translation_progress",
                        serde_json::json!({
                            "book_id": book_id,
                            "language": language,
                            "progress": progress,
                            "complete": complete,
                        })
                        .to_string(),
                    ),
                    SessionEvent::TranslationFailed {
                        book_id,
                        language,
                        reason,
                    } => (
                        "translation_failed",
                        serde_json::json!({
                            "book_id": book_id,
                            "language": language,
                            "reason": reason,
                        })
                        .to_string(),
                    ),
                    SessionEvent::TranslationCancelled { book_id, language } => (
                        "translation_cancelled",
                        serde_json::json!({ "book_id": book_id, "language": language }).to_string(),
                    ),
                    SessionEvent::ExportReady {
                        book_id,
                        file_name,
                        format,
                    } => (
                        "export_ready",
                        serde_json::json!({
                            "book_id": book_id,
                            "file_name": file_name,
                            "format": format,
                        })
                        .to_string(),
                    ),
                    SessionEvent::Error { message } => (
                        "error",
                        serde_json::json!({ "message": message }).to_string(),
                    ),
                };

                Some(Ok(Event::default().event(event_type).data(data)))
            }
            Err(_) => None, // Lagged, skip
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
