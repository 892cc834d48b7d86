//! Background jobs: the translation and export collaborators
//!
//! Jobs run as tokio tasks and report through channels; they never touch
//! the store directly. The caller turns reports into intents, which keeps
//! late or duplicate reports harmless.

mod export;
mod translate;

pub use export::{
    export_file_name, spawn_export, validate_export, ExportEvent, ExportFormat, ExportRequest,
    ExportVariant,
};
pub use translate::{
    spawn_translation, SimulatedEngine, TranslationEngine, TranslationEvent, TranslationRequest,
};

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to a running job
///
/// Dropping the handle leaves the job running to completion; cancellation
/// is always an explicit request.
pub struct JobHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl JobHandle {
    fn new(cancel: watch::Sender<bool>, task: JoinHandle<()>) -> Self {
        Self { cancel, task }
    }

    /// Ask the job to stop; it winds down with a terminal event
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Whether the job has reached a terminal event
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the job to wind down
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Receiver half a job loop polls to notice cancellation
struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    fn pair() -> (watch::Sender<bool>, CancelToken) {
        let (tx, rx) = watch::channel(false);
        (tx, CancelToken { rx })
    }

    /// Resolve once cancellation is requested; never resolves if the
    /// handle is dropped without cancelling
    async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
