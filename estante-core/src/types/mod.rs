//! Core data model: user, library books, translations, reader settings

mod book;
mod chapter;
mod settings;
mod translation;
mod user;

pub use book::{reading_progress, valid_progress, Book, BookId};
pub use chapter::{count_words, Chapter};
pub use settings::{
    FontFamily, ReaderSettings, ReaderTheme, SettingsPatch, FONT_SIZE_DEFAULT, FONT_SIZE_MAX,
    FONT_SIZE_MIN,
};
pub use translation::{Language, TranslationInfo, LANGUAGES};
pub use user::User;
