//! # Collection Manager
//!
//! [`Library`] owns an ordered sequence of [`Book`]s and is the only thing that
//! mutates it. Every operation is a single read or mutation of that sequence.
//!
//! ## Lookup Policy
//!
//! Catalog numbers are meant to be unique but nothing enforces it. All lookups
//! by catalog number scan linearly and act on the **first** match in sequence
//! order; later duplicates are never touched.
//!
//! ## Failure Model
//!
//! None of these operations fail. Absence is reported as `None` or `false`
//! and leaves the collection unchanged. The only fallible entry point is
//! [`Library::update_with`], and only because the injected [`FieldProvider`]
//! may fail.

use crate::model::{Book, BookFields};

/// Source of replacement values for an update.
///
/// The core hands over the book as it currently is and applies whatever comes
/// back. Interactive clients prompt a human here; tests return canned values.
pub trait FieldProvider {
    type Error;

    fn provide(&mut self, current: &Book) -> Result<BookFields, Self::Error>;
}

/// Ordered, in-memory collection of books.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end. No validation, no duplicate check.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the first book with this catalog number and returns it.
    pub fn remove(&mut self, isbn: &str) -> Option<Book> {
        let pos = self.position(isbn)?;
        Some(self.books.remove(pos))
    }

    /// Case-insensitive substring match on the title. An empty needle matches
    /// every book.
    pub fn find_by_title(&self, needle: &str) -> Vec<Book> {
        self.filter_contains(needle, |book| &book.title)
    }

    /// Case-insensitive substring match on the author.
    pub fn find_by_author(&self, needle: &str) -> Vec<Book> {
        self.filter_contains(needle, |book| &book.author)
    }

    /// Ascending by price. Stable: equal prices keep their relative order,
    /// `-0.0` and `0.0` included. NaN prices sort last.
    pub fn sort_by_price(&mut self) {
        self.books.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or_else(|| a.price.is_nan().cmp(&b.price.is_nan()))
        });
    }

    /// Ascending by publication year. Stable.
    pub fn sort_by_year(&mut self) {
        self.books.sort_by_key(|book| book.year);
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// Overwrites title, author, year and price of the first matching book.
    /// Returns `false` when no book has this catalog number.
    pub fn update(&mut self, isbn: &str, fields: BookFields) -> bool {
        match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) => {
                book.apply(fields);
                true
            }
            None => false,
        }
    }

    /// Like [`Library::update`], but asks `provider` for the new values once
    /// the book is found. The provider is not consulted for unknown catalog
    /// numbers.
    pub fn update_with<P: FieldProvider>(
        &mut self,
        isbn: &str,
        provider: &mut P,
    ) -> Result<bool, P::Error> {
        let Some(book) = self.books.iter_mut().find(|book| book.isbn == isbn) else {
            return Ok(false);
        };
        let fields = provider.provide(book)?;
        book.apply(fields);
        Ok(true)
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn == isbn)
    }

    fn filter_contains<F>(&self, needle: &str, field: F) -> Vec<Book>
    where
        F: Fn(&Book) -> &str,
    {
        let needle = needle.to_lowercase();
        self.books
            .iter()
            .filter(|book| field(book).to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl Extend<Book> for Library {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        self.books.extend(iter);
    }
}

// --- Test Fixtures ---

/// Sample data shared by the unit tests of this crate and its binary.
#[doc(hidden)]
pub mod fixtures {
    use super::*;

    /// The three books used throughout the catalog tests.
    pub fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Title1", "Author1", "ISBN1", 2020, 15.99),
            Book::new("Title2", "Author2", "ISBN2", 2021, 10.99),
            Book::new("Another Title", "Author1", "ISBN3", 2019, 20.99),
        ]
    }

    pub fn sample_library() -> Library {
        sample_books().into_iter().collect()
    }

    /// Provider that always answers with the same values.
    pub struct FixedFields(pub BookFields);

    impl FieldProvider for FixedFields {
        type Error = std::convert::Infallible;

        fn provide(&mut self, _current: &Book) -> Result<BookFields, Self::Error> {
            Ok(self.0.clone())
        }
    }
}
