//! Application state: the snapshot types the store transitions between

use crate::error::StoreError;
use crate::types::{Book, BookId, ReaderSettings, User};
use serde::{Deserialize, Serialize};

/// Top-level screen the application is showing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Login,
    Library,
    Reader,
}

/// Application-wide color scheme, independent of the reading surface theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlobalTheme {
    #[default]
    Light,
    Dark,
}

impl GlobalTheme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            GlobalTheme::Light => GlobalTheme::Dark,
            GlobalTheme::Dark => GlobalTheme::Light,
        }
    }
}

/// The book collection: insertion-ordered, ids unique
///
/// Each book is stored exactly once; the open book is referenced by id, so
/// there is no second copy to fall out of sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from books, validating each and rejecting duplicate ids
    pub fn from_books(books: Vec<Book>) -> Result<Self, StoreError> {
        let mut library = Self::new();
        for book in books {
            library.insert(book)?;
        }
        Ok(library)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether a book with this id exists
    pub fn contains(&self, id: &BookId) -> bool {
        self.books.iter().any(|b| &b.id == id)
    }

    /// Book by id
    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub(crate) fn get_mut(&mut self, id: &BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| &b.id == id)
    }

    pub(crate) fn insert(&mut self, book: Book) -> Result<(), StoreError> {
        book.validate()?;
        if self.contains(&book.id) {
            return Err(StoreError::DuplicateBook { id: book.id });
        }
        self.books.push(book);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &BookId) -> Option<Book> {
        let index = self.books.iter().position(|b| &b.id == id)?;
        Some(self.books.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.books.clear();
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// One immutable snapshot of the application state
///
/// Snapshots are handed out as `Arc<AppState>`; every accepted
/// state-changing intent installs a fresh one, so pointer equality is a
/// reliable change check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Signed-in user, if any
    pub user: Option<User>,

    /// Active top-level view
    pub view: View,

    /// The book collection
    pub library: Library,

    /// Id of the book open in the reader, resolved against the library
    pub current_book_id: Option<BookId>,

    /// Session-scoped display preferences, shared across all books
    pub reader_settings: ReaderSettings,

    /// Application-wide theme
    pub global_theme: GlobalTheme,
}

impl AppState {
    /// Fresh signed-out state over the given library
    pub fn new(library: Library) -> Self {
        Self {
            user: None,
            view: View::Login,
            library,
            current_book_id: None,
            reader_settings: ReaderSettings::default(),
            global_theme: GlobalTheme::Light,
        }
    }

    /// The open book, resolved against the library
    pub fn current_book(&self) -> Option<&Book> {
        self.current_book_id.as_ref().and_then(|id| self.library.get(id))
    }

    /// Check the cross-field consistency rules every snapshot must satisfy
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.view == View::Reader && self.current_book_id.is_none() {
            return Err(StoreError::ReaderNeedsBook);
        }
        if let Some(id) = &self.current_book_id {
            if !self.library.contains(id) {
                return Err(StoreError::UnknownBook { id: id.clone() });
            }
        }
        for book in &self.library {
            book.validate()?;
        }
        Ok(())
    }
}
