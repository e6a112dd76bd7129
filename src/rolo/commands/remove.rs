use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::field::Phone;
use crate::model::RemoveOutcome;

/// Remove one phone from a contact, or with `phone` absent, the whole
/// contact. Like `change`, the name is looked up first.
pub fn run(book: &mut ContactBook, name: &str, phone: Option<&str>) -> Result<CmdResult> {
    if book.get(name).is_none() {
        return Err(RoloError::ContactNotFound(name.to_string()));
    }

    let Some(raw) = phone else {
        let removed = book.remove(name)?;
        return Ok(CmdResult::default()
            .with_affected(vec![removed])
            .with_message(CmdMessage::success(format!(
                "Contact '{}' has been removed.",
                name
            ))));
    };

    let target = Phone::new(raw)?;
    let message = match book.remove_phone(name, &target)? {
        RemoveOutcome::Removed(phone) => CmdMessage::success(format!(
            "The phone number '{}' has been removed from the '{}' contact.",
            phone, name
        )),
        RemoveOutcome::NoSuchPhone(phone) => {
            CmdMessage::warning(format!("Phone number '{}' does not exist!", phone))
        }
    };

    let affected = book.get(name).cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_affected(affected)
        .with_message(message))
}
