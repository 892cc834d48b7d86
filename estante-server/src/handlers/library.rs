//! Library management handlers

use super::reject;
use super::session::StateResponse;
use crate::state::SessionState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use estante_core::{Book, BookId, Chapter, Intent, TranslationInfo};
use serde::{Deserialize, Serialize};

/// Query parameters for listing books
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    /// Page number (1-indexed, 0 treated as 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Search query matched against title and author
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    20
}

/// Sanitize page number (treat 0 as 1 to prevent underflow)
fn sanitize_page(page: u32) -> u32 {
    page.max(1)
}

/// Book summary for list responses
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub chapter_count: usize,
    pub word_count: u32,
    pub current_chapter: usize,
    pub progress: f32,
    pub reading_progress: f32,
    pub translation_available: bool,
    pub translation_progress: f32,
    pub added_at: DateTime<Utc>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            cover: book.cover.clone(),
            chapter_count: book.chapter_count(),
            word_count: book.word_count(),
            current_chapter: book.current_chapter,
            progress: book.progress,
            reading_progress: book.reading_progress(),
            translation_available: book.translation_available,
            translation_progress: book.translation_progress,
            added_at: book.added_at,
        }
    }
}

/// List response with pagination
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookSummary>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

/// List books in shelf order, filtered and paginated
pub async fn list_books(
    State(state): State<SessionState>,
    Query(query): Query<ListBooksQuery>,
) -> Json<ListBooksResponse> {
    let snapshot = state.snapshot().await;

    // Filter by search query if provided; keep insertion order
    let books: Vec<BookSummary> = snapshot
        .library
        .iter()
        .filter(|book| {
            if let Some(ref search) = query.search {
                let search_lower = search.to_lowercase();
                book.title.to_lowercase().contains(&search_lower)
                    || book.author.to_lowercase().contains(&search_lower)
            } else {
                true
            }
        })
        .map(BookSummary::from)
        .collect();

    let total = books.len() as u32;

    // Paginate; the skip count is computed in u64 so oversized page
    // parameters fall off the end instead of overflowing
    let page = sanitize_page(query.page);
    let start = u64::from(page - 1).saturating_mul(u64::from(query.per_page));
    let books: Vec<BookSummary> = books
        .into_iter()
        .skip(usize::try_from(start).unwrap_or(usize::MAX))
        .take(query.per_page as usize)
        .collect();

    Json(ListBooksResponse {
        books,
        total,
        page,
        per_page: query.per_page,
    })
}

/// Chapter without its content, for book detail responses
#[derive(Debug, Serialize)]
pub struct ChapterSummary {
    pub id: String,
    pub title: String,
    pub index: usize,
    pub word_count: u32,
    pub is_translated: bool,
}

/// Full book detail response
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub current_chapter: usize,
    pub progress: f32,
    pub reading_progress: f32,
    pub word_count: u32,
    pub translation_available: bool,
    pub translation_progress: f32,
    pub translations: Vec<TranslationInfo>,
    pub chapters: Vec<ChapterSummary>,
    pub added_at: DateTime<Utc>,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        let chapters = book
            .chapters
            .iter()
            .enumerate()
            .map(|(index, c)| ChapterSummary {
                id: c.id.clone(),
                title: c.title.clone(),
                index,
                word_count: c.word_count,
                is_translated: c.is_translated,
            })
            .collect();
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            cover: book.cover.clone(),
            current_chapter: book.current_chapter,
            progress: book.progress,
            reading_progress: book.reading_progress(),
            word_count: book.word_count(),
            translation_available: book.translation_available,
            translation_progress: book.translation_progress,
            translations: book.translations.clone(),
            chapters,
            added_at: book.added_at,
        }
    }
}

/// Get a single book's detail
pub async fn get_book(
    State(state): State<SessionState>,
    Path(id): Path<String>,
) -> Result<Json<BookResponse>, StatusCode> {
    let snapshot = state.snapshot().await;
    let book = snapshot
        .library
        .get(&BookId::from(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(BookResponse::from(book)))
}

/// Chapter as supplied when adding a book
#[derive(Debug, Deserialize)]
pub struct ChapterInput {
    /// Chapter id; numbered in order when absent
    pub id: Option<String>,

    pub title: String,
    pub content: String,
}

/// Add-book request body
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    /// Book id; generated when absent
    pub id: Option<String>,

    pub title: String,
    pub author: String,

    #[serde(default)]
    pub cover: Option<String>,

    pub chapters: Vec<ChapterInput>,
}

/// Add-book response
#[derive(Debug, Serialize)]
pub struct AddBookResponse {
    pub id: String,
    pub title: String,
    pub message: String,
}

/// Add a book to the shelf
pub async fn add_book(
    State(state): State<SessionState>,
    Json(request): Json<AddBookRequest>,
) -> Result<(StatusCode, Json<AddBookResponse>), (StatusCode, String)> {
    let chapters: Vec<Chapter> = request
        .chapters
        .into_iter()
        .enumerate()
        .map(|(index, c)| {
            let id = c.id.unwrap_or_else(|| format!("c{}", index + 1));
            Chapter::new(id, c.title, c.content)
        })
        .collect();

    let mut book = Book::new(request.title, request.author, chapters);
    if let Some(id) = request.id {
        book = book.with_id(id);
    }
    if let Some(cover) = request.cover {
        book = book.with_cover(cover);
    }

    let id = book.id.to_string();
    let title = book.title.clone();
    state
        .dispatch(Intent::AddBook { book })
        .await
        .map_err(reject)?;

    Ok((
        StatusCode::CREATED,
        Json(AddBookResponse {
            id,
            title,
            message: "Book added to the library".to_string(),
        }),
    ))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<SessionState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .dispatch(Intent::DeleteBook {
            id: BookId::from(id),
        })
        .await
        .map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every book
pub async fn delete_all_books(
    State(state): State<SessionState>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .dispatch(Intent::DeleteAllBooks)
        .await
        .map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Open a book in the reader
pub async fn open_book(
    State(state): State<SessionState>,
    Path(id): Path<String>,
) -> Result<Json<StateResponse>, (StatusCode, String)> {
    let next = state
        .dispatch(Intent::OpenBook {
            book: Some(BookId::from(id)),
        })
        .await
        .map_err(reject)?;
    Ok(Json(StateResponse::from(next.as_ref())))
}

/// Reading-position report
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub chapter: usize,
    pub progress: f32,
}

/// Record a reading position reported by a reader component
pub async fn update_progress(
    State(state): State<SessionState>,
    Path(id): Path<String>,
    Json(request): Json<ProgressRequest>,
) -> Result<Json<BookResponse>, (StatusCode, String)> {
    let id = BookId::from(id);
    let next = state
        .dispatch(Intent::UpdateBookProgress {
            id: id.clone(),
            chapter: request.chapter,
            progress: request.progress,
        })
        .await
        .map_err(reject)?;
    let book = next
        .library
        .get(&id)
        .ok_or((StatusCode::NOT_FOUND, "Unknown book".to_string()))?;
    Ok(Json(BookResponse::from(book)))
}
