//! Error types for the estante core

use crate::types::BookId;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Rejection reasons for store intents
///
/// A rejected intent leaves the current snapshot untouched; no partial
/// update is ever observable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Unknown book: {id}")]
    UnknownBook { id: BookId },

    #[error("Duplicate book id: {id}")]
    DuplicateBook { id: BookId },

    #[error("Book {id} has no chapters")]
    NoChapters { id: BookId },

    #[error("Chapter {chapter} out of range for book {id} ({chapter_count} chapters)")]
    ChapterOutOfRange {
        id: BookId,
        chapter: usize,
        chapter_count: usize,
    },

    #[error("Progress {progress} outside [0, 100]")]
    ProgressOutOfRange { progress: f32 },

    #[error("Font size {size} outside [12, 24]")]
    FontSizeOutOfRange { size: u8 },

    #[error("Cannot enter the reader without an open book")]
    ReaderNeedsBook,

    #[error("Unsupported language: {code}")]
    UnknownLanguage { code: String },

    #[error("Translation for {language} marked complete at {progress}%")]
    InconsistentTranslation { language: String, progress: f32 },

    #[error("Duplicate translation record for {language}")]
    DuplicateTranslation { language: String },
}

/// Errors from translation and export jobs
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskError {
    #[error("No translation underway for {language}")]
    TranslationNotStarted { language: String },

    #[error("Translation for {language} is not complete")]
    TranslationIncomplete { language: String },

    #[error("Engine failure: {0}")]
    EngineFailed(String),
}
