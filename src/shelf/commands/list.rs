use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;

pub fn run(library: &Library) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_books(library.books().to_vec())
        .with_total(library.len()))
}

pub fn count(library: &Library) -> Result<CmdResult> {
    let total = library.len();
    Ok(CmdResult::default()
        .with_total(total)
        .with_message(CmdMessage::info(format!(
            "Total books in the library: {}",
            total
        ))))
}
