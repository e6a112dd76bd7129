use colored::Colorize;
use rolo::api::{CmdMessage, MessageLevel};
use rolo::field::Phone;
use rolo::model::Record;
use unicode_width::UnicodeWidthStr;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Aligned contact listing: name column sized to the widest name, phones
/// comma-separated, birthday (if any) dimmed at the end.
pub(crate) fn print_records<'a>(records: impl Iterator<Item = (&'a str, &'a Record)> + Clone) {
    let name_width = records
        .clone()
        .map(|(name, _)| name.width())
        .max()
        .unwrap_or(0);

    for (name, record) in records {
        let phones = record
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let padding = " ".repeat(name_width.saturating_sub(name.width()));

        match &record.birthday {
            Some(birthday) => println!(
                "  {}{} : {}  {}",
                name.bold(),
                padding,
                phones,
                birthday.to_string().dimmed()
            ),
            None => println!("  {}{} : {}", name.bold(), padding, phones),
        }
    }
}

pub(crate) fn print_page_header(page: usize, total: usize) {
    println!("{}", format!("-- page {}/{} --", page, total).dimmed());
}
