//! # Rendering Module
//!
//! Turns command results into terminal text. Rendering functions return
//! `String`s so the menu can write them to whatever output it was given and
//! tests can inspect them.
//!
//! Column layout is owned by the model (`Book`'s `Display` and
//! `header_row`); this module only adds color and line structure.

use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::{ShelfConfig, KEYS};
use shelf::model::{header_row, Book};

pub const EMPTY_LIST: &str = "No books found.";

/// Header row followed by one row per book.
pub fn render_table(books: &[Book]) -> String {
    let mut out = format!("{}\n", header_row().bold());
    out.push_str(&render_rows(books));
    out
}

/// One row per book, no header.
pub fn render_rows(books: &[Book]) -> String {
    books.iter().map(|book| format!("{}\n", book)).collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.normal(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_config(config: &ShelfConfig) -> String {
    KEYS.iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}
