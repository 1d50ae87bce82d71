use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::CatalogStore;
use std::path::Path;

/// Appends every readable book from the catalog at `path`.
///
/// A catalog that could only be partly read still loads what it could, with a
/// warning naming the last good book.
pub fn run<S: CatalogStore>(library: &mut Library, store: &S, path: &Path) -> Result<CmdResult> {
    let Some(catalog) = store.load(path)? else {
        tracing::warn!(path = %path.display(), "catalog file not found");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "File not found: {}",
            path.display()
        ))));
    };

    let loaded = catalog.books.len();
    library.extend(catalog.books.iter().cloned());
    tracing::info!(path = %path.display(), loaded, total = library.len(), "catalog loaded");

    let mut result = CmdResult::default()
        .with_affected_books(catalog.books)
        .with_total(library.len())
        .with_message(CmdMessage::success(format!(
            "Loaded {} books from {}",
            loaded,
            path.display()
        )));

    if catalog.unread_lines > 0 {
        tracing::warn!(
            path = %path.display(),
            unread_lines = catalog.unread_lines,
            "catalog only partly readable"
        );
        result.add_message(CmdMessage::warning(format!(
            "Ignored unreadable data after book {} in {}",
            loaded,
            path.display()
        )));
    }

    Ok(result)
}
