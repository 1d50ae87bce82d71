use super::{Catalog, CatalogStore};
use crate::error::Result;
use crate::model::Book;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalogs: HashMap<PathBuf, Vec<Book>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, path: impl Into<PathBuf>, books: Vec<Book>) -> Self {
        self.catalogs.insert(path.into(), books);
        self
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<Option<Catalog>> {
        Ok(self.catalogs.get(path).cloned().map(Catalog::from))
    }

    fn save(&mut self, path: &Path, books: &[Book]) -> Result<()> {
        self.catalogs.insert(path.to_path_buf(), books.to_vec());
        Ok(())
    }
}
