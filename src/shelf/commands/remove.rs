use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::error::Result;
use crate::library::Library;

pub fn run(library: &mut Library, isbn: &str) -> Result<CmdResult> {
    match library.remove(isbn) {
        Some(book) => {
            tracing::info!(isbn, title = %book.title, "book removed");
            Ok(CmdResult::default()
                .with_affected_books(vec![book])
                .with_message(CmdMessage::success("Book removed successfully!")))
        }
        None => {
            tracing::debug!(isbn, "remove: no such book");
            Ok(CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND)))
        }
    }
}
