use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;

pub fn by_title(library: &Library, term: &str) -> Result<CmdResult> {
    let found = library.find_by_title(term);
    tracing::debug!(term, matches = found.len(), "search by title");
    Ok(finish(found, "No books found with that title."))
}

pub fn by_author(library: &Library, term: &str) -> Result<CmdResult> {
    let found = library.find_by_author(term);
    tracing::debug!(term, matches = found.len(), "search by author");
    Ok(finish(found, "No books found by that author."))
}

fn finish(found: Vec<crate::model::Book>, empty_message: &str) -> CmdResult {
    if found.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(empty_message));
    }
    CmdResult::default().with_listed_books(found)
}
