//! Shared session state

use crate::persist;
use estante_core::tasks::{JobHandle, SimulatedEngine, TranslationEngine};
use estante_core::{AppState, AppStore, BookId, Intent, StoreError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex, RwLock};

/// Shared state behind every handler
///
/// The store sits behind a write lock, so intents apply strictly one at a
/// time; everything else is read-side plumbing around its snapshots.
#[derive(Clone)]
pub struct SessionState {
    /// The application store; the single owner of session state
    pub store: Arc<RwLock<AppStore>>,

    /// Translation engine injected at construction
    pub engine: Arc<dyn TranslationEngine>,

    /// Pacing for simulated export jobs
    pub export_pace: Duration,

    /// Where the library persists between runs, if anywhere
    pub library_path: Option<PathBuf>,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<SessionEvent>,

    /// Running translation jobs keyed by book and language
    pub jobs: Arc<Mutex<JobRegistry>>,
}

/// Events pushed to connected clients
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// An accepted intent changed the state
    StateChanged { intent: &'static str },

    /// A translation job reported progress
    TranslationProgress {
        book_id: String,
        language: String,
        progress: f32,
        complete: bool,
    },

    /// A translation job gave up
    TranslationFailed {
        book_id: String,
        language: String,
        reason: String,
    },

    /// A translation job was cancelled
    TranslationCancelled { book_id: String, language: String },

    /// An export artifact is ready
    ExportReady {
        book_id: String,
        file_name: String,
        format: String,
    },

    /// An error occurred
    Error { message: String },
}

/// Book-and-language keyed index of running translation jobs
#[derive(Default)]
pub struct JobRegistry {
    translations: HashMap<(BookId, String), JobHandle>,
}

impl JobRegistry {
    /// Drop handles whose jobs already reached a terminal event
    fn prune(&mut self) {
        self.translations.retain(|_, handle| !handle.is_finished());
    }

    /// Whether a translation job is underway for this book and language
    pub fn translation_running(&mut self, book: &BookId, language: &str) -> bool {
        self.prune();
        self.translations
            .contains_key(&(book.clone(), language.to_string()))
    }

    /// Track a newly started translation job
    pub fn insert_translation(&mut self, book: BookId, language: String, handle: JobHandle) {
        self.prune();
        self.translations.insert((book, language), handle);
    }

    /// Request cancellation; true if a running job was found
    pub fn cancel_translation(&mut self, book: &BookId, language: &str) -> bool {
        self.prune();
        match self.translations.get(&(book.clone(), language.to_string())) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Forget a job that reported its terminal event
    pub fn remove_translation(&mut self, book: &BookId, language: &str) {
        self.translations
            .remove(&(book.clone(), language.to_string()));
    }
}

impl SessionState {
    /// Create session state over a store, with the given translation engine
    pub fn new(store: AppStore, engine: Arc<dyn TranslationEngine>) -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            store: Arc::new(RwLock::new(store)),
            engine,
            export_pace: Duration::from_millis(1500),
            library_path: None,
            event_tx,
            jobs: Arc::new(Mutex::new(JobRegistry::default())),
        }
    }

    /// Session state with the default simulated engine
    pub fn with_simulated_engine(store: AppStore) -> Self {
        Self::new(store, Arc::new(SimulatedEngine::default()))
    }

    /// Persist the library to this path after every library change
    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Override the simulated export pacing
    pub fn with_export_pace(mut self, pace: Duration) -> Self {
        self.export_pace = pace;
        self
    }

    /// The current snapshot
    pub async fn snapshot(&self) -> Arc<AppState> {
        self.store.read().await.snapshot()
    }

    /// Apply one intent: lock, dispatch, persist, log, broadcast
    ///
    /// Accepted no-ops neither persist nor notify; rejected intents pass
    /// the store error through untouched. The library is saved while the
    /// write lock is still held, so files reach disk in intent order and
    /// a concurrent dispatch can never overwrite a newer library with an
    /// older one.
    pub async fn dispatch(&self, intent: Intent) -> Result<Arc<AppState>, StoreError> {
        let label = intent.describe();
        let touches_library = matches!(
            intent,
            Intent::AddBook { .. }
                | Intent::DeleteBook { .. }
                | Intent::DeleteAllBooks
                | Intent::UpdateBookProgress { .. }
                | Intent::UpdateTranslationProgress { .. }
        );

        let mut store = self.store.write().await;
        let before = store.snapshot();
        let after = store.dispatch(intent)?;

        if Arc::ptr_eq(&before, &after) {
            tracing::debug!(intent = label, "accepted no-op");
            return Ok(after);
        }

        if touches_library {
            if let Some(path) = &self.library_path {
                if let Err(e) = persist::save_library(path, &after.library).await {
                    tracing::error!("Failed to save library: {}", e);
                    self.broadcast(SessionEvent::Error {
                        message: format!("Failed to save library: {}", e),
                    });
                }
            }
        }
        drop(store);

        tracing::info!(intent = label, "state transition");
        self.broadcast(SessionEvent::StateChanged { intent: label });

        Ok(after)
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: SessionEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}
