//! Translation jobs over a pluggable engine

use super::{CancelToken, JobHandle};
use crate::error::TaskError;
use crate::types::{BookId, Chapter};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Strategy seam for producing a chapter in a target language
///
/// The core ships a simulated engine; a real backend would implement this
/// trait and plug in without touching the job loop.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Translate one chapter into the target language
    async fn translate_chapter(&self, chapter: &Chapter, language: &str) -> Result<(), TaskError>;
}

/// Engine that pretends to translate by pacing per chapter
pub struct SimulatedEngine {
    chapter_time: Duration,
}

impl SimulatedEngine {
    /// Engine taking `chapter_time` per chapter
    pub fn new(chapter_time: Duration) -> Self {
        Self { chapter_time }
    }
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

#[async_trait]
impl TranslationEngine for SimulatedEngine {
    async fn translate_chapter(
        &self,
        _chapter: &Chapter,
        _language: &str,
    ) -> Result<(), TaskError> {
        tokio::time::sleep(self.chapter_time).await;
        Ok(())
    }
}

/// Reports a translation job emits while it runs
///
/// `Progress` carries the percentage of chapters done; exactly one of
/// `Completed`, `Failed`, or `Cancelled` ends the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationEvent {
    Progress {
        book: BookId,
        language: String,
        progress: f32,
    },
    Completed {
        book: BookId,
        language: String,
    },
    Failed {
        book: BookId,
        language: String,
        reason: String,
    },
    Cancelled {
        book: BookId,
        language: String,
    },
}

/// Everything a translation job needs to run
///
/// Chapters are the shared immutable slice from the book, so spawning a
/// job copies no text.
pub struct TranslationRequest {
    pub book: BookId,
    pub language: String,
    pub chapters: Arc<[Chapter]>,
}

/// Spawn a job translating the chapters one by one
pub fn spawn_translation(
    request: TranslationRequest,
    engine: Arc<dyn TranslationEngine>,
    events: mpsc::Sender<TranslationEvent>,
) -> JobHandle {
    let (cancel_tx, mut token) = CancelToken::pair();
    let task = tokio::spawn(async move {
        let TranslationRequest {
            book,
            language,
            chapters,
        } = request;
        let total = chapters.len();
        for (index, chapter) in chapters.iter().enumerate() {
            tokio::select! {
                _ = token.cancelled() => {
                    let _ = events
                        .send(TranslationEvent::Cancelled { book, language })
                        .await;
                    return;
                }
                result = engine.translate_chapter(chapter, &language) => {
                    if let Err(err) = result {
                        let _ = events
                            .send(TranslationEvent::Failed {
                                book,
                                language,
                                reason: err.to_string(),
                            })
                            .await;
                        return;
                    }
                }
            }
            let progress = (index + 1) as f32 / total as f32 * 100.0;
            let report = TranslationEvent::Progress {
                book: book.clone(),
                language: language.clone(),
                progress,
            };
            if events.send(report).await.is_err() {
                // Receiver gone, nobody left to report to
                return;
            }
        }
        let _ = events
            .send(TranslationEvent::Completed { book, language })
            .await;
    });
    JobHandle::new(cancel_tx, task)
}
