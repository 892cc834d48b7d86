//! Export jobs: produce a named artifact for a book
//!
//! No file is actually encoded; the job validates what the caller asked
//! for, paces, and reports the file name the artifact would carry.

use super::{CancelToken, JobHandle};
use crate::error::TaskError;
use crate::types::{Book, BookId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;

/// Which text goes into the exported file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum ExportVariant {
    /// The untranslated text
    Original,

    /// A translation still underway
    Partial { language: String },

    /// A finished translation
    Complete { language: String },
}

impl ExportVariant {
    /// Stable key used in file names
    pub fn key(&self) -> &'static str {
        match self {
            ExportVariant::Original => "original",
            ExportVariant::Partial { .. } => "partial",
            ExportVariant::Complete { .. } => "complete",
        }
    }

    /// Target language, when the variant names one
    pub fn language(&self) -> Option<&str> {
        match self {
            ExportVariant::Original => None,
            ExportVariant::Partial { language } | ExportVariant::Complete { language } => {
                Some(language)
            }
        }
    }
}

/// Output container for an export
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Epub,
    Pdf,
    Audio,
}

impl ExportFormat {
    /// File extension; audio exports are delivered as mp3
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Epub => "epub",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Audio => "mp3",
        }
    }
}

/// Reports an export job emits; exactly one ends the stream
#[derive(Debug, Clone, PartialEq)]
pub enum ExportEvent {
    Completed {
        book: BookId,
        file_name: String,
        format: ExportFormat,
    },
    Cancelled {
        book: BookId,
    },
}

/// Everything an export job needs to run
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub book: BookId,
    pub title: String,
    pub variant: ExportVariant,
    pub format: ExportFormat,
}

/// Check the requested variant against the book's translation records
///
/// `Original` is always available; `Partial` needs a translation underway,
/// `Complete` a finished one.
pub fn validate_export(book: &Book, variant: &ExportVariant) -> Result<(), TaskError> {
    match variant {
        ExportVariant::Original => Ok(()),
        ExportVariant::Partial { language } => match book.translation(language) {
            Some(info) if info.is_partial() => Ok(()),
            _ => Err(TaskError::TranslationNotStarted {
                language: language.clone(),
            }),
        },
        ExportVariant::Complete { language } => match book.translation(language) {
            Some(info) if info.is_complete => Ok(()),
            _ => Err(TaskError::TranslationIncomplete {
                language: language.clone(),
            }),
        },
    }
}

/// File name the artifact would carry: `<title>_<variant>.<ext>`
pub fn export_file_name(title: &str, variant: &ExportVariant, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        sanitize_file_stem(title, 50),
        variant.key(),
        format.extension()
    )
}

/// Strip characters unsafe in file names and cap the length
fn sanitize_file_stem(name: &str, max_len: usize) -> String {
    name.chars()
        .take(max_len)
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_' || *c == '.')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Spawn a job producing the artifact after `pace`
///
/// Callers run [`validate_export`] first; the job itself only paces and
/// reports.
pub fn spawn_export(
    request: ExportRequest,
    pace: Duration,
    events: mpsc::Sender<ExportEvent>,
) -> JobHandle {
    let (cancel_tx, mut token) = CancelToken::pair();
    let task = tokio::spawn(async move {
        let ExportRequest {
            book,
            title,
            variant,
            format,
        } = request;
        let file_name = export_file_name(&title, &variant, format);
        tokio::select! {
            _ = token.cancelled() => {
                let _ = events.send(ExportEvent::Cancelled { book }).await;
            }
            _ = tokio::time::sleep(pace) => {
                let _ = events
                    .send(ExportEvent::Completed {
                        book,
                        file_name,
                        format,
                    })
                    .await;
            }
        }
    });
    JobHandle::new(cancel_tx, task)
}
