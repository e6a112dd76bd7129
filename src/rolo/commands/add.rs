use crate::book::{AddOutcome, ContactBook};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::field::{Name, Phone};

/// Insert-or-append: create the contact if the name is new, otherwise add
/// the phone to the existing record.
pub fn run(book: &mut ContactBook, name: &str, phone: &str) -> Result<CmdResult> {
    let name = Name::new(name)?;
    let phone = Phone::new(phone)?;

    let phone_str = phone.as_str().to_string();
    let name_str = name.as_str().to_string();
    let outcome = book.add(name, phone);

    let message = match outcome {
        AddOutcome::Created => CmdMessage::success("New contact saved!"),
        AddOutcome::PhoneAppended => CmdMessage::success(format!(
            "The phone number '{}' has been added to the '{}' contact.",
            phone_str, name_str
        )),
    };

    let affected = book.get(&name_str).cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_affected(affected)
        .with_message(message))
}
