//! Reader handlers: the open chapter and navigation through it

use super::reject;
use super::session::StateResponse;
use crate::state::SessionState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use estante_core::{
    reading_progress, AppState, Book, Chapter, Intent, ReaderSettings, SettingsPatch,
};
use serde::{Deserialize, Serialize};

/// Chapter with its content, as shown on the reading surface
#[derive(Debug, Serialize)]
pub struct ChapterContent {
    pub id: String,
    pub title: String,
    pub content: String,
    pub word_count: u32,
    pub is_translated: bool,
}

impl From<&Chapter> for ChapterContent {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.clone(),
            title: chapter.title.clone(),
            content: chapter.content.clone(),
            word_count: chapter.word_count,
            is_translated: chapter.is_translated,
        }
    }
}

/// The reading surface: open book, current chapter, display settings
#[derive(Debug, Serialize)]
pub struct ReaderResponse {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub chapter_index: usize,
    pub chapter_count: usize,
    pub chapter: ChapterContent,
    pub progress: f32,
    pub reading_progress: f32,
    pub settings: ReaderSettings,
}

fn no_open_book() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "No book is open".to_string())
}

fn reader_response(state: &AppState, book: &Book) -> Result<ReaderResponse, (StatusCode, String)> {
    let chapter = book.chapter(book.current_chapter).ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        "Reading position out of range".to_string(),
    ))?;
    Ok(ReaderResponse {
        book_id: book.id.to_string(),
        title: book.title.clone(),
        author: book.author.clone(),
        chapter_index: book.current_chapter,
        chapter_count: book.chapter_count(),
        chapter: ChapterContent::from(chapter),
        progress: book.progress,
        reading_progress: book.reading_progress(),
        settings: state.reader_settings,
    })
}

/// The open book's current chapter
pub async fn current_chapter(
    State(state): State<SessionState>,
) -> Result<Json<ReaderResponse>, (StatusCode, String)> {
    let snapshot = state.snapshot().await;
    let book = snapshot.current_book().ok_or_else(no_open_book)?;
    Ok(Json(reader_response(&snapshot, book)?))
}

/// Close the reader, back to the library
pub async fn close_reader(
    State(state): State<SessionState>,
) -> Result<Json<StateResponse>, (StatusCode, String)> {
    let next = state
        .dispatch(Intent::OpenBook { book: None })
        .await
        .map_err(reject)?;
    Ok(Json(StateResponse::from(next.as_ref())))
}

/// Move the open book to `target` and report the derived position
async fn go_to(
    state: &SessionState,
    target: usize,
) -> Result<Json<ReaderResponse>, (StatusCode, String)> {
    let snapshot = state.snapshot().await;
    let book = snapshot.current_book().ok_or_else(no_open_book)?;
    let id = book.id.clone();
    let progress = reading_progress(target, book.chapter_count());

    let next = state
        .dispatch(Intent::UpdateBookProgress {
            id: id.clone(),
            chapter: target,
            progress,
        })
        .await
        .map_err(reject)?;

    let book = next.library.get(&id).ok_or_else(no_open_book)?;
    Ok(Json(reader_response(&next, book)?))
}

/// Turn to the next chapter
pub async fn next_chapter(
    State(state): State<SessionState>,
) -> Result<Json<ReaderResponse>, (StatusCode, String)> {
    let snapshot = state.snapshot().await;
    let book = snapshot.current_book().ok_or_else(no_open_book)?;
    if book.current_chapter + 1 >= book.chapter_count() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Already at the last chapter".to_string(),
        ));
    }
    go_to(&state, book.current_chapter + 1).await
}

/// Turn back to the previous chapter
pub async fn previous_chapter(
    State(state): State<SessionState>,
) -> Result<Json<ReaderResponse>, (StatusCode, String)> {
    let snapshot = state.snapshot().await;
    let book = snapshot.current_book().ok_or_else(no_open_book)?;
    if book.current_chapter == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "Already at the first chapter".to_string(),
        ));
    }
    go_to(&state, book.current_chapter - 1).await
}

/// Jump-to-chapter request
#[derive(Debug, Deserialize)]
pub struct GotoRequest {
    pub chapter: usize,
}

/// Jump to a chapter by index
pub async fn goto_chapter(
    State(state): State<SessionState>,
    Json(request): Json<GotoRequest>,
) -> Result<Json<ReaderResponse>, (StatusCode, String)> {
    go_to(&state, request.chapter).await
}

/// Merge a partial settings update into the reader settings
pub async fn update_settings(
    State(state): State<SessionState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<ReaderSettings>, (StatusCode, String)> {
    let next = state
        .dispatch(Intent::UpdateReaderSettings { patch })
        .await
        .map_err(reject)?;
    Ok(Json(next.reader_settings))
}
