//! The Book type and its derived read-model helpers

use super::{Chapter, TranslationInfo};
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Opaque book identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A book in the user's library
///
/// Chapters are shared behind an `Arc` slice: snapshots clone cheaply and
/// chapter text is immutable by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier within the library
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Cover image reference (URL or path), opaque to the store
    pub cover: String,

    /// Ordered, immutable chapters
    pub chapters: Arc<[Chapter]>,

    /// 0-based index of the chapter being read; always < chapters.len()
    pub current_chapter: usize,

    /// Caller-reported reading progress in [0, 100]
    pub progress: f32,

    /// Whether any translation record exists for this book
    pub translation_available: bool,

    /// Book-level translation percentage, mirroring the latest report
    pub translation_progress: f32,

    /// Per-language translation records, one per language
    pub translations: Vec<TranslationInfo>,

    /// When the book entered the library
    pub added_at: DateTime<Utc>,
}

impl Book {
    /// Create a book with a generated id, positioned at the first chapter
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            id: BookId::generate(),
            title: title.into(),
            author: author.into(),
            cover: String::new(),
            chapters: chapters.into(),
            current_chapter: 0,
            progress: 0.0,
            translation_available: false,
            translation_progress: 0.0,
            translations: Vec::new(),
            added_at: Utc::now(),
        }
    }

    /// Override the generated id
    pub fn with_id(mut self, id: impl Into<BookId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the cover image reference
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = cover.into();
        self
    }

    /// Set the reading position
    pub fn with_position(mut self, chapter: usize, progress: f32) -> Self {
        self.current_chapter = chapter;
        self.progress = progress;
        self
    }

    /// Attach a translation record, refreshing the book-level summary
    pub fn with_translation(mut self, info: TranslationInfo) -> Self {
        self.translation_available = true;
        self.translation_progress = info.progress;
        self.translations.push(info);
        self
    }

    /// Number of chapters
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Chapter at the given index
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Total word count across all chapters
    pub fn word_count(&self) -> u32 {
        self.chapters.iter().map(|c| c.word_count).sum()
    }

    /// Chapter-position progress derived from the current chapter index
    pub fn reading_progress(&self) -> f32 {
        reading_progress(self.current_chapter, self.chapter_count())
    }

    /// Translation record for the given language code
    pub fn translation(&self, code: &str) -> Option<&TranslationInfo> {
        self.translations.iter().find(|t| t.language == code)
    }

    /// Translations underway but unfinished
    pub fn partial_translations(&self) -> impl Iterator<Item = &TranslationInfo> {
        self.translations.iter().filter(|t| t.is_partial())
    }

    /// Finished translations
    pub fn completed_translations(&self) -> impl Iterator<Item = &TranslationInfo> {
        self.translations.iter().filter(|t| t.is_complete)
    }

    /// Check the book's internal consistency rules
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.chapters.is_empty() {
            return Err(StoreError::NoChapters {
                id: self.id.clone(),
            });
        }
        if self.current_chapter >= self.chapters.len() {
            return Err(StoreError::ChapterOutOfRange {
                id: self.id.clone(),
                chapter: self.current_chapter,
                chapter_count: self.chapters.len(),
            });
        }
        if !valid_progress(self.progress) {
            return Err(StoreError::ProgressOutOfRange {
                progress: self.progress,
            });
        }
        if !valid_progress(self.translation_progress) {
            return Err(StoreError::ProgressOutOfRange {
                progress: self.translation_progress,
            });
        }
        for (i, info) in self.translations.iter().enumerate() {
            if !valid_progress(info.progress) {
                return Err(StoreError::ProgressOutOfRange {
                    progress: info.progress,
                });
            }
            if info.is_complete && info.progress != 100.0 {
                return Err(StoreError::InconsistentTranslation {
                    language: info.language.clone(),
                    progress: info.progress,
                });
            }
            if self.translations[..i].iter().any(|t| t.language == info.language) {
                return Err(StoreError::DuplicateTranslation {
                    language: info.language.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Chapter-position progress: `chapter / (count - 1) * 100`
///
/// A single-chapter book is pinned to 100: being on the last chapter is
/// full progress.
pub fn reading_progress(chapter: usize, chapter_count: usize) -> f32 {
    if chapter_count <= 1 {
        100.0
    } else {
        chapter as f32 / (chapter_count - 1) as f32 * 100.0
    }
}

/// Whether a percentage is inside [0, 100]; NaN never is
pub fn valid_progress(value: f32) -> bool {
    (0.0..=100.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn two_chapter_book() -> Book {
        Book::new(
            "Dom Casmurro",
            "Machado de Assis",
            vec![
                Chapter::new("c1", "Do título", "Uma noite destas vindo da cidade"),
                Chapter::new("c2", "Do livro", "Agora que expliquei o título"),
            ],
        )
    }

    #[test]
    fn test_book_creation() {
        let book = two_chapter_book();
        assert_eq!(book.chapter_count(), 2);
        assert_eq!(book.current_chapter, 0);
        assert_eq!(book.progress, 0.0);
        assert!(!book.translation_available);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_reading_progress_formula() {
        assert_eq!(reading_progress(0, 2), 0.0);
        assert_eq!(reading_progress(1, 2), 100.0);
        assert_eq!(reading_progress(1, 3), 50.0);
        assert_eq!(reading_progress(0, 1), 100.0);
        let third = reading_progress(1, 4);
        assert!((third - 33.333_332).abs() < 0.001);
    }

    #[test]
    fn test_word_count_sums_chapters() {
        let book = two_chapter_book();
        assert_eq!(book.word_count(), 6 + 5);
    }

    #[test]
    fn test_valid_progress_rejects_nan_and_range() {
        assert!(valid_progress(0.0));
        assert!(valid_progress(100.0));
        assert!(!valid_progress(-0.5));
        assert!(!valid_progress(100.5));
        assert!(!valid_progress(f32::NAN));
    }

    #[test]
    fn test_validate_rejects_out_of_range_chapter() {
        let book = two_chapter_book().with_position(2, 0.0);
        assert!(matches!(
            book.validate(),
            Err(StoreError::ChapterOutOfRange { chapter: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_incomplete_marked_complete() {
        let en = Language::by_code("en").unwrap();
        let book = two_chapter_book().with_translation(TranslationInfo::new(en, 80.0, true));
        assert!(matches!(
            book.validate(),
            Err(StoreError::InconsistentTranslation { .. })
        ));
    }

    #[test]
    fn test_translation_filters() {
        let en = Language::by_code("en").unwrap();
        let fr = Language::by_code("fr").unwrap();
        let book = two_chapter_book()
            .with_translation(TranslationInfo::new(en, 100.0, true))
            .with_translation(TranslationInfo::new(fr, 75.0, false));

        let partial: Vec<_> = book.partial_translations().collect();
        assert_eq!(partial.len(), 1);
        assert_eq!(partial[0].language, "fr");

        let complete: Vec<_> = book.completed_translations().collect();
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0].language, "en");
    }

    #[test]
    fn test_serialization_round_trip() {
        let book = two_chapter_book();
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, back);
    }
}
