use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::Book;

pub fn run(library: &mut Library, book: Book) -> Result<CmdResult> {
    tracing::info!(isbn = %book.isbn, title = %book.title, "adding book");
    library.add(book.clone());

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(CmdMessage::success("Book added successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn appends_and_reports_success() {
        let mut library = Library::new();
        let book = Book::new("Dune", "Frank Herbert", "D1", 1965, 9.99);

        let result = run(&mut library, book.clone()).unwrap();
        assert_eq!(library.books(), &[book.clone()]);
        assert_eq!(result.affected_books, vec![book]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Book added successfully!");
    }
}
