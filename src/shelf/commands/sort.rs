use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Year,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Price => write!(f, "price"),
            SortKey::Year => write!(f, "year"),
        }
    }
}

pub fn run(library: &mut Library, key: SortKey) -> Result<CmdResult> {
    match key {
        SortKey::Price => library.sort_by_price(),
        SortKey::Year => library.sort_by_year(),
    }
    tracing::info!(%key, books = library.len(), "catalog sorted");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Books sorted by {}.",
        key
    ))))
}
