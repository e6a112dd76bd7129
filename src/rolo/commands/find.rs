use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Substring search over names (case-insensitive) and normalized phone
/// values (case-sensitive). An empty result set is a reported outcome.
pub fn run(book: &ContactBook, fragment: &str) -> Result<CmdResult> {
    let matches = book.find(fragment);

    let message = if matches.is_empty() {
        CmdMessage::info(format!("Contacts with fragment '{}' not found.", fragment))
    } else {
        CmdMessage::success(format!("Found contacts for fragment '{}':", fragment))
    };

    Ok(CmdResult::default()
        .with_listed(matches)
        .with_message(message))
}
