use crate::book::{ContactBook, Pages};
use crate::error::{Result, RoloError};

/// Start a paginated traversal for `show all`. Returns the cursor itself
/// so the display layer can pull pages one at a time; an empty book gives
/// a cursor that yields no pages.
pub fn run(book: &ContactBook, page_size: usize) -> Result<Pages> {
    if page_size == 0 {
        return Err(RoloError::Validation(
            "Page size must be a positive number".to_string(),
        ));
    }
    Ok(book.pages(page_size))
}
