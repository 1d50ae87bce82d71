use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;

pub fn run(library: &mut Library) -> Result<CmdResult> {
    let removed = library.len();
    library.clear();
    tracing::info!(removed, "catalog cleared");

    Ok(CmdResult::default()
        .with_total(0)
        .with_message(CmdMessage::success(
            "All books have been removed from the library!",
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::fixtures::sample_library;

    #[test]
    fn empties_the_library() {
        let mut library = sample_library();
        let result = run(&mut library).unwrap();
        assert!(library.is_empty());
        assert_eq!(result.total, Some(0));
    }

    #[test]
    fn clearing_empty_library_still_succeeds() {
        let mut library = Library::new();
        let result = run(&mut library).unwrap();
        assert_eq!(
            result.messages[0].content,
            "All books have been removed from the library!"
        );
    }
}
