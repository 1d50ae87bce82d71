use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::CatalogStore;
use std::path::Path;

pub fn run<S: CatalogStore>(library: &Library, store: &mut S, path: &Path) -> Result<CmdResult> {
    store.save(path, library.books())?;
    tracing::info!(path = %path.display(), saved = library.len(), "catalog saved");

    Ok(CmdResult::default()
        .with_total(library.len())
        .with_message(CmdMessage::success(format!(
            "Saved {} books to {}",
            library.len(),
            path.display()
        ))))
}
