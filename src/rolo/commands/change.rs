use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::field::Phone;
use crate::model::ChangeOutcome;

/// Replace one of a contact's phones. The name is looked up before the
/// phones are validated, so changing an unknown contact reports "not
/// found" even when the phone arguments are garbage. A missing phone on
/// an existing contact is a reported outcome, not an error.
pub fn run(book: &mut ContactBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    if book.get(name).is_none() {
        return Err(RoloError::ContactNotFound(name.to_string()));
    }
    let old = Phone::new(old)?;
    let new = Phone::new(new)?;

    let message = match book.change(name, &old, new)? {
        ChangeOutcome::Replaced { new, .. } => CmdMessage::success(format!(
            "{}'s phone has been replaced with a new phone {}",
            name, new
        )),
        ChangeOutcome::NoSuchPhone(phone) => {
            CmdMessage::warning(format!("Phone number '{}' does not exist!", phone))
        }
    };

    let affected = book.get(name).cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_affected(affected)
        .with_message(message))
}
