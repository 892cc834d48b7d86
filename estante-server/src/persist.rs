//! Library persistence
//!
//! The library is stored as a plain JSON array of books. Loading validates
//! everything through the same constructor the store uses, so a corrupt or
//! hand-edited file is rejected rather than smuggled into the session.

use anyhow::Context;
use estante_core::{Book, Library};
use std::path::Path;

/// Load a library from disk; a missing file yields an empty library
pub async fn load_library(path: &Path) -> anyhow::Result<Library> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Library::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read library from {}", path.display()))
        }
    };

    let books: Vec<Book> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse library from {}", path.display()))?;

    let library = Library::from_books(books)
        .with_context(|| format!("Invalid library in {}", path.display()))?;

    tracing::info!(books = library.len(), path = %path.display(), "Loaded library");
    Ok(library)
}

/// Save the library atomically: write a temp file, then rename into place
pub async fn save_library(path: &Path, library: &Library) -> anyhow::Result<()> {
    let data =
        serde_json::to_string_pretty(library.books()).context("Failed to serialize library")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create library directory")?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, data)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to move library into {}", path.display()))?;

    tracing::debug!(books = library.len(), path = %path.display(), "Saved library");
    Ok(())
}
