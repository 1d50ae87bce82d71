//! # Storage Layer
//!
//! Persistence is optional in shelf: the catalog lives in memory and is only
//! read from or written to disk when the user asks. The [`CatalogStore`]
//! trait is that collaborator.
//!
//! ## Implementations
//!
//! - [`text::TextStore`]: Production file-based storage in the line-oriented
//!   text format (five lines per book, see [`text`])
//! - [`memory::InMemoryStore`]: Keeps "files" in a map, for testing
//!
//! ## Missing and Damaged Catalogs
//!
//! A catalog that does not exist is not an error: `load` returns `Ok(None)` and
//! the command layer turns that into a warning. Neither is a catalog that is
//! only partly readable: the books before the damage come back in a
//! [`Catalog`] whose `unread_lines` counts what was left behind. Errors are
//! reserved for real I/O failures.

use crate::error::Result;
use crate::model::Book;
use std::path::Path;

pub mod memory;
pub mod text;

/// The books read from one catalog file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub books: Vec<Book>,
    /// Non-blank lines after the last readable book
    pub unread_lines: usize,
}

impl Catalog {
    pub fn is_truncated(&self) -> bool {
        self.unread_lines > 0
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self {
            books,
            unread_lines: 0,
        }
    }
}

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Read every readable book from the catalog at `path`.
    ///
    /// Returns `Ok(None)` when there is no catalog at that path.
    fn load(&self, path: &Path) -> Result<Option<Catalog>>;

    /// Write `books` to `path`, replacing whatever was there.
    fn save(&mut self, path: &Path, books: &[Book]) -> Result<()>;
}
