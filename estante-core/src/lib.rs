//! Estante Core Library
//!
//! This crate provides the central state machine for the estante reading
//! application: the data model (user, library, books, translations, reader
//! settings), the application store that transitions immutable state
//! snapshots through intents, and the background-job plumbing for the
//! simulated translation and export collaborators.

pub mod error;
pub mod state;
pub mod store;
pub mod tasks;
pub mod types;

pub use error::{Result, StoreError, TaskError};
pub use state::{AppState, GlobalTheme, Library, View};
pub use store::{AppStore, Intent};
pub use types::{
    reading_progress, Book, BookId, Chapter, FontFamily, Language, ReaderSettings, ReaderTheme,
    SettingsPatch, TranslationInfo, User, LANGUAGES,
};
