//! Line-oriented text catalog.
//!
//! Each book is written as five lines, in order: title, author, catalog
//! number, year, price. Records follow one another with no separator:
//!
//! ```text
//! Title1
//! Author1
//! ISBN1
//! 2020
//! 15.99
//! Title2
//! ...
//! ```
//!
//! Reading is forgiving: a record with missing trailing lines, or whose year or
//! price does not parse, marks the end of the readable data. Everything read
//! before that point is kept, and the non-blank lines from there on are
//! counted in [`Catalog::unread_lines`] so callers can tell the user.

use super::{Catalog, CatalogStore};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const FIELDS_PER_BOOK: usize = 5;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextStore;

impl TextStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogStore for TextStore {
    fn load(&self, path: &Path) -> Result<Option<Catalog>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(parse_catalog(&content)))
    }

    fn save(&mut self, path: &Path, books: &[Book]) -> Result<()> {
        self.ensure_parent(path)?;
        let mut buf = Vec::new();
        write_catalog(&mut buf, books).map_err(ShelfError::Io)?;
        fs::write(path, buf).map_err(ShelfError::Io)?;
        Ok(())
    }
}

/// Writes one field per line, with no quoting.
///
/// The format cannot carry a line break inside a field, and surrounding
/// whitespace is trimmed when read back. Menu input is read a line at a time,
/// so neither comes up for books entered there.
pub fn write_catalog<W: Write>(mut writer: W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(writer, "{}", book.title)?;
        writeln!(writer, "{}", book.author)?;
        writeln!(writer, "{}", book.isbn)?;
        writeln!(writer, "{}", book.year)?;
        writeln!(writer, "{}", book.price)?;
    }
    Ok(())
}

pub fn parse_catalog(content: &str) -> Catalog {
    let lines: Vec<&str> = content.lines().collect();
    let mut books = Vec::new();

    for record in lines.chunks(FIELDS_PER_BOOK) {
        match parse_record(record) {
            Some(book) => books.push(book),
            None => break,
        }
    }

    let unread_lines = lines[books.len() * FIELDS_PER_BOOK..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .count();

    Catalog {
        books,
        unread_lines,
    }
}

fn parse_record(record: &[&str]) -> Option<Book> {
    let [title, author, isbn, year, price] = record else {
        return None;
    };
    let year = year.trim().parse().ok()?;
    let price = price.trim().parse().ok()?;
    Some(Book::new(title.trim(), author.trim(), isbn.trim(), year, price))
}
