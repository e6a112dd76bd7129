use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::field::Birthday;
use chrono::NaiveDate;

/// With `date` present, set (or clear, for an empty string) the contact's
/// birthday; without it, report the days until the next one. `today` is
/// passed in so the calendar arithmetic stays testable.
pub fn run(
    book: &mut ContactBook,
    name: &str,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<CmdResult> {
    if let Some(raw) = date {
        let birthday = Birthday::parse(raw)?;
        let record = book
            .get_mut(name)
            .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
        let message = match &birthday {
            Some(b) => CmdMessage::success(format!("{}'s birthday is set to {}", name, b)),
            None => CmdMessage::success(format!("{}'s birthday has been cleared", name)),
        };
        record.set_birthday(birthday);
        let affected = vec![record.clone()];
        return Ok(CmdResult::default()
            .with_affected(affected)
            .with_message(message));
    }

    let record = book
        .get(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
    let message = match record.days_to_birthday(today) {
        None => CmdMessage::info("Birthday not specified."),
        Some(days) => CmdMessage::success(format!(
            "{}: {} days until next birthday",
            name, days
        )),
    };
    Ok(CmdResult::default()
        .with_affected(vec![record.clone()])
        .with_message(message))
}
