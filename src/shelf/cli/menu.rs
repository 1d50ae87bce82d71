use super::prompt::{any_year, is_closed, valid_price, PromptedFields, Prompter};
use super::render::{render_messages, render_rows, render_table};
use shelf::api::{CmdResult, ShelfApi, SortKey};
use shelf::error::Result;
use shelf::model::Book;
use shelf::store::CatalogStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "\
Library Management System
1. Add a new book
2. Remove a book
3. Search books by title
4. Search books by author
5. Display all books
6. Sort books by price
7. Sort books by year
8. Load books from file
9. Save books to file
10. Display total books
11. Clear all books
12. Display book by ISBN
13. Update book details
14. Exit
Enter your choice: ";

const INVALID_INPUT: &str = "Invalid input. Please enter a number between 1 and 14.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 14.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Remove,
    SearchTitle,
    SearchAuthor,
    DisplayAll,
    SortPrice,
    SortYear,
    Load,
    Save,
    Total,
    Clear,
    Show,
    Update,
    Exit,
}

impl Choice {
    fn from_number(n: u32) -> Option<Self> {
        let choice = match n {
            1 => Choice::Add,
            2 => Choice::Remove,
            3 => Choice::SearchTitle,
            4 => Choice::SearchAuthor,
            5 => Choice::DisplayAll,
            6 => Choice::SortPrice,
            7 => Choice::SortYear,
            8 => Choice::Load,
            9 => Choice::Save,
            10 => Choice::Total,
            11 => Choice::Clear,
            12 => Choice::Show,
            13 => Choice::Update,
            14 => Choice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// The numbered menu loop. Borrows the session's API for its lifetime.
pub struct Menu<'a, S: CatalogStore, R, W> {
    api: &'a mut ShelfApi<S>,
    prompter: Prompter<R, W>,
}

impl<'a, S: CatalogStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut ShelfApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            prompter: Prompter::new(input, output),
        }
    }

    /// Runs until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if is_closed(&e) => {
                    tracing::debug!("input closed, leaving menu");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.prompter.say("Exiting program...")
    }

    /// One round: show the menu, handle a selection. `false` means exit.
    fn step(&mut self) -> Result<bool> {
        let answer = self.prompter.line(&format!("\n{}", MENU))?;
        let Ok(number) = answer.trim().parse::<u32>() else {
            self.prompter.say(INVALID_INPUT)?;
            return Ok(true);
        };
        let Some(choice) = Choice::from_number(number) else {
            self.prompter.say(INVALID_CHOICE)?;
            return Ok(true);
        };
        tracing::debug!(?choice, "menu selection");

        match choice {
            Choice::Add => {
                let book = self.read_book()?;
                let result = self.api.add_book(book)?;
                self.show(&result)?;
            }
            Choice::Remove => {
                let isbn = self.prompter.line("Enter ISBN of the book to remove: ")?;
                let result = self.api.remove_book(&isbn)?;
                self.show(&result)?;
            }
            Choice::SearchTitle => {
                let term = self.prompter.line("Enter title to search for: ")?;
                let result = self.api.search_by_title(&term)?;
                self.show_rows(&result)?;
            }
            Choice::SearchAuthor => {
                let term = self.prompter.line("Enter author to search for: ")?;
                let result = self.api.search_by_author(&term)?;
                self.show_rows(&result)?;
            }
            Choice::DisplayAll => {
                let result = self.api.list_books()?;
                self.prompter.emit(&render_table(&result.listed_books))?;
            }
            Choice::SortPrice => {
                let result = self.api.sort_books(SortKey::Price)?;
                self.show(&result)?;
            }
            Choice::SortYear => {
                let result = self.api.sort_books(SortKey::Year)?;
                self.show(&result)?;
            }
            Choice::Load => {
                let path = self.read_path("Enter filename to load from")?;
                let result = self.api.load_catalog(Some(path.as_path()));
                self.show_or_report(result)?;
            }
            Choice::Save => {
                let path = self.read_path("Enter filename to save to")?;
                let result = self.api.save_catalog(Some(path.as_path()));
                self.show_or_report(result)?;
            }
            Choice::Total => {
                let result = self.api.count_books()?;
                self.show(&result)?;
            }
            Choice::Clear => {
                let result = self.api.clear_books()?;
                self.show(&result)?;
            }
            Choice::Show => {
                let isbn = self.prompter.line("Enter ISBN to display: ")?;
                let result = self.api.show_book(&isbn)?;
                self.show_rows(&result)?;
            }
            Choice::Update => {
                let isbn = self.prompter.line("Enter ISBN of the book to update: ")?;
                let mut provider = PromptedFields(&mut self.prompter);
                let result = self.api.update_book_with(&isbn, &mut provider)?;
                self.show(&result)?;
            }
            Choice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn read_book(&mut self) -> Result<Book> {
        let title = self.prompter.line("Enter book title: ")?;
        let author = self.prompter.line("Enter book author: ")?;
        let isbn = self.prompter.line("Enter book ISBN: ")?;
        let year = self.prompter.number("Enter book year: ", any_year)?;
        let price = self.prompter.number("Enter book price: ", valid_price)?;
        Ok(Book::new(title, author, isbn, year, price))
    }

    /// Empty answer means the session's catalog file.
    fn read_path(&mut self, label: &str) -> Result<PathBuf> {
        let default = self.api.catalog_path();
        let answer = self
            .prompter
            .line(&format!("{} [{}]: ", label, default.display()))?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default)
        } else {
            Ok(PathBuf::from(answer))
        }
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        self.prompter.emit(&render_messages(&result.messages))
    }

    fn show_rows(&mut self, result: &CmdResult) -> Result<()> {
        self.prompter.emit(&render_rows(&result.listed_books))?;
        self.show(result)
    }

    // File problems are reported and the menu carries on.
    fn show_or_report(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => self.show(&result),
            Err(e) => {
                tracing::warn!(error = %e, "catalog file operation failed");
                self.prompter.say(&format!("Error: {}", e))
            }
        }
    }
}
