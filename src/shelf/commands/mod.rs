use crate::config::ShelfConfig;
use crate::model::Book;
use std::path::{Path, PathBuf};

pub mod add;
pub mod clear;
pub mod config;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;
pub mod search;
pub mod show;
pub mod sort;
pub mod update;

pub const NOT_FOUND: &str = "Book not found!";

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub config_dir: PathBuf,
    /// Catalog file given on the command line; wins over the configured one
    pub catalog: Option<PathBuf>,
}

impl ShelfPaths {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn catalog_path(&self, config: &ShelfConfig) -> PathBuf {
        match &self.catalog {
            Some(path) => path.clone(),
            None => config.data_path(&self.config_dir),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books added, removed or changed by the command
    pub affected_books: Vec<Book>,
    /// Books the command wants displayed
    pub listed_books: Vec<Book>,
    pub total: Option<usize>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is a warning or error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
