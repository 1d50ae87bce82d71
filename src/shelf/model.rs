use std::fmt;
use unicode_width::UnicodeWidthStr;

pub const TITLE_WIDTH: usize = 20;
pub const AUTHOR_WIDTH: usize = 20;
pub const ISBN_WIDTH: usize = 15;
pub const YEAR_WIDTH: usize = 10;
pub const PRICE_WIDTH: usize = 10;

/// One catalog entry.
///
/// Books have no identity beyond their fields: two books with the same values
/// compare equal. The `isbn` is the lookup key but nothing enforces that it is
/// unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    pub price: f64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i32,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
            price: unsigned_zero(price),
        }
    }

    /// Overwrites everything except the catalog number.
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.year = fields.year;
        self.price = fields.price;
    }
}

/// The values an update may replace. The catalog number is not among them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub price: f64,
}

impl BookFields {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            price: unsigned_zero(price),
        }
    }
}

impl From<&Book> for BookFields {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            price: book.price,
        }
    }
}

/// Fixed-column row: title, author, ISBN, year, price (two decimals).
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            pad_to_width(&self.title, TITLE_WIDTH),
            pad_to_width(&self.author, AUTHOR_WIDTH),
            pad_to_width(&self.isbn, ISBN_WIDTH),
            pad_to_width(&self.year.to_string(), YEAR_WIDTH),
            pad_to_width(&format!("{:.2}", self.price), PRICE_WIDTH),
        )
    }
}

/// Column labels aligned with the rows produced by `Book`'s `Display`.
pub fn header_row() -> String {
    format!(
        "{}{}{}{}{}",
        pad_to_width("Title", TITLE_WIDTH),
        pad_to_width("Author", AUTHOR_WIDTH),
        pad_to_width("ISBN", ISBN_WIDTH),
        pad_to_width("Year", YEAR_WIDTH),
        pad_to_width("Price", PRICE_WIDTH),
    )
}

// `-0.0 == 0.0`, but it would print as "-0.00".
fn unsigned_zero(price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        price
    }
}

// Pads by display width so CJK and accented titles keep the columns aligned.
// Values wider than the column are left intact.
fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}
