use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::error::Result;
use crate::library::Library;

pub fn run(library: &Library, isbn: &str) -> Result<CmdResult> {
    match library.find_by_isbn(isbn) {
        Some(book) => Ok(CmdResult::default().with_listed_books(vec![book.clone()])),
        None => {
            tracing::debug!(isbn, "show: no such book");
            Ok(CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND)))
        }
    }
}
