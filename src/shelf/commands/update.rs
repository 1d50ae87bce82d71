use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::error::{Result, ShelfError};
use crate::library::{FieldProvider, Library};
use crate::model::BookFields;

const UPDATED: &str = "Book details updated successfully!";

/// Update with explicit replacement values.
pub fn run(library: &mut Library, isbn: &str, fields: BookFields) -> Result<CmdResult> {
    let updated = library.update(isbn, fields);
    Ok(finish(library, isbn, updated))
}

/// Update with values supplied by `provider` once the book is found.
pub fn run_with<P>(library: &mut Library, isbn: &str, provider: &mut P) -> Result<CmdResult>
where
    P: FieldProvider,
    ShelfError: From<P::Error>,
{
    let updated = library.update_with(isbn, provider)?;
    Ok(finish(library, isbn, updated))
}

fn finish(library: &Library, isbn: &str, updated: bool) -> CmdResult {
    if !updated {
        tracing::debug!(isbn, "update: no such book");
        return CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND));
    }

    tracing::info!(isbn, "book updated");
    let affected = library.find_by_isbn(isbn).cloned().into_iter().collect();
    CmdResult::default()
        .with_affected_books(affected)
        .with_message(CmdMessage::success(UPDATED))
}
