//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all catalog operations, whatever UI drives them.
//!
//! `ShelfApi` owns the one [`Library`] instance for the session. There is no
//! global catalog: a client builds an API, passes it where it is needed, and
//! drops it when done.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `library.rs`
//! - **I/O on the terminal**: no stdout, stderr or stdin
//! - **Presentation**: returns `CmdResult`s, not strings
//!
//! ## Generic Over CatalogStore
//!
//! `ShelfApi<S: CatalogStore>` is generic over the persistence backend:
//! - Production: `ShelfApi<TextStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::library::{FieldProvider, Library};
use crate::model::{Book, BookFields};
use crate::store::CatalogStore;
use std::path::{Path, PathBuf};

/// The main API facade for shelf operations.
pub struct ShelfApi<S: CatalogStore> {
    library: Library,
    store: S,
    paths: ShelfPaths,
    config: ShelfConfig,
}

impl<S: CatalogStore> ShelfApi<S> {
    pub fn new(store: S, paths: ShelfPaths, config: ShelfConfig) -> Self {
        Self {
            library: Library::new(),
            store,
            paths,
            config,
        }
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.library = library;
        self
    }

    pub fn add_book(&mut self, book: Book) -> Result<CmdResult> {
        commands::add::run(&mut self.library, book)
    }

    pub fn remove_book(&mut self, isbn: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.library, isbn)
    }

    pub fn search_by_title(&self, term: &str) -> Result<CmdResult> {
        commands::search::by_title(&self.library, term)
    }

    pub fn search_by_author(&self, term: &str) -> Result<CmdResult> {
        commands::search::by_author(&self.library, term)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn count_books(&self) -> Result<CmdResult> {
        commands::list::count(&self.library)
    }

    pub fn sort_books(&mut self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&mut self.library, key)
    }

    pub fn clear_books(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.library)
    }

    pub fn show_book(&self, isbn: &str) -> Result<CmdResult> {
        commands::show::run(&self.library, isbn)
    }

    pub fn update_book(&mut self, isbn: &str, fields: BookFields) -> Result<CmdResult> {
        commands::update::run(&mut self.library, isbn, fields)
    }

    pub fn update_book_with<P>(&mut self, isbn: &str, provider: &mut P) -> Result<CmdResult>
    where
        P: FieldProvider,
        ShelfError: From<P::Error>,
    {
        commands::update::run_with(&mut self.library, isbn, provider)
    }

    /// Loads from `path`, or from the session's catalog file when `None`.
    pub fn load_catalog(&mut self, path: Option<&Path>) -> Result<CmdResult> {
        let path = self.resolve(path);
        commands::load::run(&mut self.library, &self.store, &path)
    }

    /// Saves to `path`, or to the session's catalog file when `None`.
    pub fn save_catalog(&mut self, path: Option<&Path>) -> Result<CmdResult> {
        let path = self.resolve(path);
        commands::save::run(&self.library, &mut self.store, &path)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(self.paths.config_dir(), action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn settings(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn paths(&self) -> &ShelfPaths {
        &self.paths
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.paths.catalog_path(&self.config)
    }

    fn resolve(&self, path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| self.catalog_path())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::sort::SortKey;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};
