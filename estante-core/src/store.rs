//! The application store: intents in, immutable snapshots out
//!
//! Every state change flows through [`AppStore::dispatch`]. An accepted
//! intent that changes anything installs a fresh `Arc<AppState>`; an
//! accepted intent that changes nothing keeps the current one; a rejected
//! intent returns an error and touches nothing. Consumers compare snapshot
//! pointers (`Arc::ptr_eq`) to detect change.

use crate::error::{Result, StoreError};
use crate::state::{AppState, Library, View};
use crate::types::{
    valid_progress, Book, BookId, Language, SettingsPatch, TranslationInfo, User, FONT_SIZE_MAX,
    FONT_SIZE_MIN,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A requested state transition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Intent {
    /// Sign in with a pre-validated identity and land in the library
    Login { user: User },

    /// Sign out: clears the user and the open book, back to the login view
    Logout,

    /// Switch the top-level view without touching anything else
    SetView { view: View },

    /// Open a book in the reader, or close back to the library with `None`
    OpenBook { book: Option<BookId> },

    /// Add a book to the library
    AddBook { book: Book },

    /// Remove one book; closes the reader if it was the open one
    DeleteBook { id: BookId },

    /// Remove every book
    DeleteAllBooks,

    /// Merge a partial display-settings update
    UpdateReaderSettings { patch: SettingsPatch },

    /// Record the reading position a reader component reported
    UpdateBookProgress {
        id: BookId,
        chapter: usize,
        progress: f32,
    },

    /// Record a translation progress report from a translation job
    UpdateTranslationProgress {
        id: BookId,
        language: String,
        progress: f32,
        complete: bool,
    },

    /// Flip the application-wide theme
    ToggleGlobalTheme,
}

impl Intent {
    /// Short label for structured logs
    pub fn describe(&self) -> &'static str {
        match self {
            Intent::Login { .. } => "login",
            Intent::Logout => "logout",
            Intent::SetView { .. } => "set_view",
            Intent::OpenBook { .. } => "open_book",
            Intent::AddBook { .. } => "add_book",
            Intent::DeleteBook { .. } => "delete_book",
            Intent::DeleteAllBooks => "delete_all_books",
            Intent::UpdateReaderSettings { .. } => "update_reader_settings",
            Intent::UpdateBookProgress { .. } => "update_book_progress",
            Intent::UpdateTranslationProgress { .. } => "update_translation_progress",
            Intent::ToggleGlobalTheme => "toggle_global_theme",
        }
    }
}

/// Owner of the canonical application state
///
/// `dispatch` takes `&mut self`, so intents apply strictly one at a time;
/// wrap the store in a lock to share it across tasks.
pub struct AppStore {
    state: Arc<AppState>,
}

impl AppStore {
    /// Start signed out over the given library
    pub fn new(library: Library) -> Self {
        Self {
            state: Arc::new(AppState::new(library)),
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Apply one intent
    ///
    /// Returns the snapshot current after the intent: fresh on an accepted
    /// change, unchanged on an accepted no-op. On `Err` the previous
    /// snapshot stays installed.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Arc<AppState>> {
        let next = match intent {
            Intent::Login { user } => self.login(user),
            Intent::Logout => self.logout(),
            Intent::SetView { view } => self.set_view(view)?,
            Intent::OpenBook { book } => self.open_book(book)?,
            Intent::AddBook { book } => self.add_book(book)?,
            Intent::DeleteBook { id } => self.delete_book(&id)?,
            Intent::DeleteAllBooks => self.delete_all_books(),
            Intent::UpdateReaderSettings { patch } => self.update_reader_settings(&patch)?,
            Intent::UpdateBookProgress {
                id,
                chapter,
                progress,
            } => self.update_book_progress(&id, chapter, progress)?,
            Intent::UpdateTranslationProgress {
                id,
                language,
                progress,
                complete,
            } => self.update_translation_progress(&id, &language, progress, complete)?,
            Intent::ToggleGlobalTheme => self.toggle_global_theme(),
        };
        if let Some(next) = next {
            self.state = Arc::new(next);
        }
        Ok(Arc::clone(&self.state))
    }

    fn login(&self, user: User) -> Option<AppState> {
        if self.state.user.as_ref() == Some(&user) && self.state.view == View::Library {
            return None;
        }
        let mut next = (*self.state).clone();
        next.user = Some(user);
        next.view = View::Library;
        Some(next)
    }

    fn logout(&self) -> Option<AppState> {
        if self.state.user.is_none()
            && self.state.current_book_id.is_none()
            && self.state.view == View::Login
        {
            return None;
        }
        let mut next = (*self.state).clone();
        next.user = None;
        next.current_book_id = None;
        next.view = View::Login;
        Some(next)
    }

    fn set_view(&self, view: View) -> Result<Option<AppState>> {
        if view == View::Reader && self.state.current_book_id.is_none() {
            return Err(StoreError::ReaderNeedsBook);
        }
        if self.state.view == view {
            return Ok(None);
        }
        let mut next = (*self.state).clone();
        next.view = view;
        Ok(Some(next))
    }

    fn open_book(&self, book: Option<BookId>) -> Result<Option<AppState>> {
        let (target, view) = match book {
            Some(id) => {
                if !self.state.library.contains(&id) {
                    return Err(StoreError::UnknownBook { id });
                }
                (Some(id), View::Reader)
            }
            None => (None, View::Library),
        };
        if self.state.current_book_id == target && self.state.view == view {
            return Ok(None);
        }
        let mut next = (*self.state).clone();
        next.current_book_id = target;
        next.view = view;
        Ok(Some(next))
    }

    fn add_book(&self, book: Book) -> Result<Option<AppState>> {
        let mut next = (*self.state).clone();
        next.library.insert(book)?;
        Ok(Some(next))
    }

    fn delete_book(&self, id: &BookId) -> Result<Option<AppState>> {
        if !self.state.library.contains(id) {
            return Err(StoreError::UnknownBook { id: id.clone() });
        }
        let mut next = (*self.state).clone();
        next.library.remove(id);
        if next.current_book_id.as_ref() == Some(id) {
            next.current_book_id = None;
            if next.view == View::Reader {
                next.view = View::Library;
            }
        }
        Ok(Some(next))
    }

    fn delete_all_books(&self) -> Option<AppState> {
        if self.state.library.is_empty() && self.state.current_book_id.is_none() {
            return None;
        }
        let mut next = (*self.state).clone();
        next.library.clear();
        next.current_book_id = None;
        if next.view == View::Reader {
            next.view = View::Library;
        }
        Some(next)
    }

    fn update_reader_settings(&self, patch: &SettingsPatch) -> Result<Option<AppState>> {
        if patch.is_empty() {
            return Ok(None);
        }
        if let Some(size) = patch.font_size {
            if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&size) {
                return Err(StoreError::FontSizeOutOfRange { size });
            }
        }
        let merged = self.state.reader_settings.merged(patch);
        if merged == self.state.reader_settings {
            return Ok(None);
        }
        let mut next = (*self.state).clone();
        next.reader_settings = merged;
        Ok(Some(next))
    }

    fn update_book_progress(
        &self,
        id: &BookId,
        chapter: usize,
        progress: f32,
    ) -> Result<Option<AppState>> {
        let book = self
            .state
            .library
            .get(id)
            .ok_or_else(|| StoreError::UnknownBook { id: id.clone() })?;
        if chapter >= book.chapter_count() {
            return Err(StoreError::ChapterOutOfRange {
                id: id.clone(),
                chapter,
                chapter_count: book.chapter_count(),
            });
        }
        if !valid_progress(progress) {
            return Err(StoreError::ProgressOutOfRange { progress });
        }
        if book.current_chapter == chapter && book.progress == progress {
            return Ok(None);
        }
        let mut next = (*self.state).clone();
        let entry = next.library.get_mut(id).ok_or_else(|| StoreError::UnknownBook {
            id: id.clone(),
        })?;
        entry.current_chapter = chapter;
        entry.progress = progress;
        Ok(Some(next))
    }

    fn update_translation_progress(
        &self,
        id: &BookId,
        language: &str,
        progress: f32,
        complete: bool,
    ) -> Result<Option<AppState>> {
        let book = self
            .state
            .library
            .get(id)
            .ok_or_else(|| StoreError::UnknownBook { id: id.clone() })?;
        let catalog = Language::by_code(language).ok_or_else(|| StoreError::UnknownLanguage {
            code: language.to_string(),
        })?;
        if !valid_progress(progress) {
            return Err(StoreError::ProgressOutOfRange { progress });
        }
        if complete && progress != 100.0 {
            return Err(StoreError::InconsistentTranslation {
                language: language.to_string(),
                progress,
            });
        }

        // Late or duplicate reports that change nothing are accepted no-ops
        let unchanged = book.translation(language).is_some_and(|existing| {
            existing.progress == progress && existing.is_complete == complete
        }) && book.translation_available
            && book.translation_progress == progress;
        if unchanged {
            return Ok(None);
        }

        let mut next = (*self.state).clone();
        let entry = next.library.get_mut(id).ok_or_else(|| StoreError::UnknownBook {
            id: id.clone(),
        })?;
        match entry.translations.iter_mut().find(|t| t.language == language) {
            Some(existing) => {
                existing.progress = progress;
                existing.is_complete = complete;
            }
            None => {
                entry
                    .translations
                    .push(TranslationInfo::new(catalog, progress, complete));
            }
        }
        entry.translation_available = true;
        entry.translation_progress = progress;
        Ok(Some(next))
    }

    fn toggle_global_theme(&self) -> Option<AppState> {
        let mut next = (*self.state).clone();
        next.global_theme = next.global_theme.toggled();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Chapter, ReaderTheme};

    fn chapter(id: &str, title: &str) -> Chapter {
        Chapter::new(id, title, "Uma noite destas vindo da cidade para o Engenho Novo")
    }

    fn sample_library() -> Library {
        Library::from_books(vec![
            Book::new(
                "Dom Casmurro",
                "Machado de Assis",
                vec![chapter("c1", "Do título"), chapter("c2", "Do livro")],
            )
            .with_id("dom-casmurro"),
            Book::new("O Cortiço", "Aluísio Azevedo", vec![chapter("c1", "Capítulo I")])
                .with_id("o-cortico"),
        ])
        .unwrap()
    }

    fn signed_in_store() -> AppStore {
        let mut store = AppStore::new(sample_library());
        store
            .dispatch(Intent::Login {
                user: User::from_email("capitu@exemplo.com.br"),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_initial_state() {
        let store = AppStore::new(sample_library());
        let state = store.snapshot();
        assert_eq!(state.view, View::Login);
        assert!(state.user.is_none());
        assert!(state.current_book_id.is_none());
        assert_eq!(state.library.len(), 2);
    }

    #[test]
    fn test_login_lands_in_library() {
        let mut store = AppStore::new(sample_library());
        let state = store
            .dispatch(Intent::Login {
                user: User::from_email("capitu@exemplo.com.br"),
            })
            .unwrap();
        assert_eq!(state.view, View::Library);
        assert_eq!(state.user.as_ref().unwrap().name, "capitu");
    }

    #[test]
    fn test_logout_clears_session_keeps_library_and_settings() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::UpdateReaderSettings {
                patch: SettingsPatch {
                    font_size: Some(20),
                    ..Default::default()
                },
            })
            .unwrap();
        store
            .dispatch(Intent::OpenBook {
                book: Some("dom-casmurro".into()),
            })
            .unwrap();

        let state = store.dispatch(Intent::Logout).unwrap();
        assert!(state.user.is_none());
        assert!(state.current_book_id.is_none());
        assert_eq!(state.view, View::Login);
        assert_eq!(state.library.len(), 2);
        assert_eq!(state.reader_settings.font_size, 20);
    }

    #[test]
    fn test_open_book_enters_reader() {
        let mut store = signed_in_store();
        let state = store
            .dispatch(Intent::OpenBook {
                book: Some("o-cortico".into()),
            })
            .unwrap();
        assert_eq!(state.view, View::Reader);
        assert_eq!(state.current_book().unwrap().title, "O Cortiço");
    }

    #[test]
    fn test_open_unknown_book_is_rejected_without_change() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        let result = store.dispatch(Intent::OpenBook {
            book: Some("fantasma".into()),
        });
        assert!(matches!(result, Err(StoreError::UnknownBook { .. })));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_close_book_returns_to_library() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::OpenBook {
                book: Some("dom-casmurro".into()),
            })
            .unwrap();
        let state = store.dispatch(Intent::OpenBook { book: None }).unwrap();
        assert_eq!(state.view, View::Library);
        assert!(state.current_book_id.is_none());
    }

    #[test]
    fn test_set_view_reader_requires_open_book() {
        let mut store = signed_in_store();
        let result = store.dispatch(Intent::SetView { view: View::Reader });
        assert_eq!(result.unwrap_err(), StoreError::ReaderNeedsBook);

        store
            .dispatch(Intent::OpenBook {
                book: Some("dom-casmurro".into()),
            })
            .unwrap();
        store.dispatch(Intent::SetView { view: View::Library }).unwrap();
        let state = store.dispatch(Intent::SetView { view: View::Reader }).unwrap();
        assert_eq!(state.view, View::Reader);
    }

    #[test]
    fn test_set_same_view_is_a_noop() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        let after = store
            .dispatch(Intent::SetView { view: View::Library })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_add_book_appends_in_order() {
        let mut store = signed_in_store();
        let book = Book::new("Iracema", "José de Alencar", vec![chapter("c1", "Capítulo I")])
            .with_id("iracema");
        let state = store.dispatch(Intent::AddBook { book }).unwrap();
        assert_eq!(state.library.len(), 3);
        assert_eq!(state.library.books()[2].title, "Iracema");
    }

    #[test]
    fn test_add_book_rejects_duplicate_id() {
        let mut store = signed_in_store();
        let book = Book::new("Outro", "Alguém", vec![chapter("c1", "I")]).with_id("o-cortico");
        let result = store.dispatch(Intent::AddBook { book });
        assert!(matches!(result, Err(StoreError::DuplicateBook { .. })));
    }

    #[test]
    fn test_add_book_rejects_empty_chapters() {
        let mut store = signed_in_store();
        let book = Book::new("Vazio", "Ninguém", vec![]);
        let result = store.dispatch(Intent::AddBook { book });
        assert!(matches!(result, Err(StoreError::NoChapters { .. })));
    }

    #[test]
    fn test_delete_open_book_closes_reader_atomically() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::OpenBook {
                book: Some("dom-casmurro".into()),
            })
            .unwrap();
        let state = store
            .dispatch(Intent::DeleteBook {
                id: "dom-casmurro".into(),
            })
            .unwrap();
        assert!(!state.library.contains(&"dom-casmurro".into()));
        assert!(state.current_book_id.is_none());
        assert_eq!(state.view, View::Library);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_delete_other_book_keeps_reader_open() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::OpenBook {
                book: Some("dom-casmurro".into()),
            })
            .unwrap();
        let state = store
            .dispatch(Intent::DeleteBook {
                id: "o-cortico".into(),
            })
            .unwrap();
        assert_eq!(state.view, View::Reader);
        assert_eq!(state.current_book().unwrap().title, "Dom Casmurro");
    }

    #[test]
    fn test_delete_all_books_empties_and_closes() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::OpenBook {
                book: Some("o-cortico".into()),
            })
            .unwrap();
        let state = store.dispatch(Intent::DeleteAllBooks).unwrap();
        assert!(state.library.is_empty());
        assert!(state.current_book_id.is_none());
        assert_eq!(state.view, View::Library);
    }

    #[test]
    fn test_delete_all_on_empty_library_is_a_noop() {
        let mut store = AppStore::new(Library::new());
        let before = store.snapshot();
        let after = store.dispatch(Intent::DeleteAllBooks).unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_settings_merge_keeps_unspecified_fields() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::UpdateReaderSettings {
                patch: SettingsPatch {
                    theme: Some(ReaderTheme::Sepia),
                    ..Default::default()
                },
            })
            .unwrap();
        let state = store
            .dispatch(Intent::UpdateReaderSettings {
                patch: SettingsPatch {
                    font_size: Some(22),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(state.reader_settings.font_size, 22);
        assert_eq!(state.reader_settings.theme, ReaderTheme::Sepia);
    }

    #[test]
    fn test_settings_out_of_bounds_font_size_rejected() {
        let mut store = signed_in_store();
        for size in [11, 25, 0] {
            let result = store.dispatch(Intent::UpdateReaderSettings {
                patch: SettingsPatch {
                    font_size: Some(size),
                    ..Default::default()
                },
            });
            assert_eq!(result.unwrap_err(), StoreError::FontSizeOutOfRange { size });
        }
        assert_eq!(store.snapshot().reader_settings.font_size, 16);
    }

    #[test]
    fn test_empty_settings_patch_is_a_noop() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        let after = store
            .dispatch(Intent::UpdateReaderSettings {
                patch: SettingsPatch::default(),
            })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_identical_settings_patch_is_a_noop() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        let after = store
            .dispatch(Intent::UpdateReaderSettings {
                patch: SettingsPatch {
                    font_size: Some(16),
                    ..Default::default()
                },
            })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_progress_update_reaches_both_accessors() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::OpenBook {
                book: Some("dom-casmurro".into()),
            })
            .unwrap();
        let state = store
            .dispatch(Intent::UpdateBookProgress {
                id: "dom-casmurro".into(),
                chapter: 1,
                progress: 100.0,
            })
            .unwrap();

        let in_library = state.library.get(&"dom-casmurro".into()).unwrap();
        let open = state.current_book().unwrap();
        assert_eq!(in_library.current_chapter, 1);
        assert_eq!(in_library.progress, 100.0);
        assert_eq!(open.current_chapter, 1);
        assert_eq!(open.progress, 100.0);
    }

    #[test]
    fn test_progress_update_stores_value_verbatim() {
        let mut store = signed_in_store();
        let state = store
            .dispatch(Intent::UpdateBookProgress {
                id: "dom-casmurro".into(),
                chapter: 0,
                progress: 37.5,
            })
            .unwrap();
        assert_eq!(state.library.get(&"dom-casmurro".into()).unwrap().progress, 37.5);
    }

    #[test]
    fn test_progress_rejects_chapter_out_of_range() {
        let mut store = signed_in_store();
        let result = store.dispatch(Intent::UpdateBookProgress {
            id: "o-cortico".into(),
            chapter: 1,
            progress: 0.0,
        });
        assert!(matches!(
            result,
            Err(StoreError::ChapterOutOfRange {
                chapter: 1,
                chapter_count: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_progress_rejects_bad_percentages() {
        let mut store = signed_in_store();
        for progress in [-0.1, 100.1, f32::NAN] {
            let result = store.dispatch(Intent::UpdateBookProgress {
                id: "dom-casmurro".into(),
                chapter: 0,
                progress,
            });
            assert!(matches!(result, Err(StoreError::ProgressOutOfRange { .. })));
        }
    }

    #[test]
    fn test_duplicate_progress_report_is_a_noop() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::UpdateBookProgress {
                id: "dom-casmurro".into(),
                chapter: 1,
                progress: 100.0,
            })
            .unwrap();
        let before = store.snapshot();
        let after = store
            .dispatch(Intent::UpdateBookProgress {
                id: "dom-casmurro".into(),
                chapter: 1,
                progress: 100.0,
            })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_translation_report_upserts_with_catalog_metadata() {
        let mut store = signed_in_store();
        let state = store
            .dispatch(Intent::UpdateTranslationProgress {
                id: "dom-casmurro".into(),
                language: "fr".to_string(),
                progress: 40.0,
                complete: false,
            })
            .unwrap();
        let book = state.library.get(&"dom-casmurro".into()).unwrap();
        let record = book.translation("fr").unwrap();
        assert_eq!(record.language_name, "Francês");
        assert_eq!(record.progress, 40.0);
        assert!(!record.is_complete);
        assert!(book.translation_available);
        assert_eq!(book.translation_progress, 40.0);

        let state = store
            .dispatch(Intent::UpdateTranslationProgress {
                id: "dom-casmurro".into(),
                language: "fr".to_string(),
                progress: 100.0,
                complete: true,
            })
            .unwrap();
        let book = state.library.get(&"dom-casmurro".into()).unwrap();
        assert_eq!(book.translations.len(), 1);
        assert!(book.translation("fr").unwrap().is_complete);
        assert_eq!(book.translation_progress, 100.0);
    }

    #[test]
    fn test_translation_report_rejections() {
        let mut store = signed_in_store();
        let id: BookId = "dom-casmurro".into();

        let result = store.dispatch(Intent::UpdateTranslationProgress {
            id: id.clone(),
            language: "tlh".to_string(),
            progress: 10.0,
            complete: false,
        });
        assert!(matches!(result, Err(StoreError::UnknownLanguage { .. })));

        let result = store.dispatch(Intent::UpdateTranslationProgress {
            id: id.clone(),
            language: "en".to_string(),
            progress: 80.0,
            complete: true,
        });
        assert!(matches!(
            result,
            Err(StoreError::InconsistentTranslation { .. })
        ));

        let result = store.dispatch(Intent::UpdateTranslationProgress {
            id: "fantasma".into(),
            language: "en".to_string(),
            progress: 10.0,
            complete: false,
        });
        assert!(matches!(result, Err(StoreError::UnknownBook { .. })));
    }

    #[test]
    fn test_duplicate_translation_report_is_a_noop() {
        let mut store = signed_in_store();
        store
            .dispatch(Intent::UpdateTranslationProgress {
                id: "o-cortico".into(),
                language: "en".to_string(),
                progress: 30.0,
                complete: false,
            })
            .unwrap();
        let before = store.snapshot();
        let after = store
            .dispatch(Intent::UpdateTranslationProgress {
                id: "o-cortico".into(),
                language: "en".to_string(),
                progress: 30.0,
                complete: false,
            })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_toggle_theme_flips_only_the_theme() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        let state = store.dispatch(Intent::ToggleGlobalTheme).unwrap();
        assert_eq!(state.global_theme, crate::state::GlobalTheme::Dark);
        assert_eq!(state.view, before.view);
        assert_eq!(state.reader_settings, before.reader_settings);
        let state = store.dispatch(Intent::ToggleGlobalTheme).unwrap();
        assert_eq!(state.global_theme, crate::state::GlobalTheme::Light);
    }

    #[test]
    fn test_accepted_change_installs_fresh_snapshot() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        let after = store.dispatch(Intent::ToggleGlobalTheme).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&after, &store.snapshot()));
    }
}
