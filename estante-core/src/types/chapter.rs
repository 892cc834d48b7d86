//! Chapter type representing a single chapter of a book

use serde::{Deserialize, Serialize};

/// A single chapter of a book
///
/// Chapters never change after the book is created; the store exposes no
/// operation that mutates one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Chapter identifier, unique within its book
    pub id: String,

    /// Chapter title
    pub title: String,

    /// Sanitized body markup, opaque to the store
    pub content: String,

    /// Whitespace-separated word count of the content
    pub word_count: u32,

    /// Whether this chapter's text came from a translation
    pub is_translated: bool,
}

impl Chapter {
    /// Create a chapter, counting words from the content
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let word_count = count_words(&content);
        Self {
            id: id.into(),
            title: title.into(),
            content,
            word_count,
            is_translated: false,
        }
    }

    /// Mark the chapter as translated text
    pub fn translated(mut self) -> Self {
        self.is_translated = true;
        self
    }
}

/// Count whitespace-separated words
pub fn count_words(content: &str) -> u32 {
    content.split_whitespace().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_from_content() {
        let chapter = Chapter::new("c1", "Capítulo I", "No dia seguinte à chegada");
        assert_eq!(chapter.word_count, 5);
        assert!(!chapter.is_translated);
    }

    #[test]
    fn test_empty_content_counts_zero() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
    }

    #[test]
    fn test_translated_builder() {
        let chapter = Chapter::new("c1", "Chapter I", "The next day").translated();
        assert!(chapter.is_translated);
    }
}
