//! Validated value objects: every field of a contact validates its string
//! form once, at construction, and is immutable afterwards. Replacing a
//! phone means building a new [`Phone`] and swapping it in, so no record
//! can ever hold an un-normalized value.

use crate::error::{Result, RoloError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Free text, stored verbatim, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(RoloError::Validation(
                "Contact name cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Name::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number, held only in normalized `+<countrycode><digits>` form.
///
/// Normalization keeps the digits of the input in order and drops
/// everything else. A bare 10-digit number gets the default `+38` country
/// code, a 12-digit number gets a `+`, any other digit count is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let normalized = match digits.len() {
            10 => format!("+38{}", digits),
            12 => format!("+{}", digits),
            _ => {
                return Err(RoloError::Validation(format!(
                    "Phone number '{}' entered incorrectly",
                    raw
                )))
            }
        };
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        // Persisted values are already normalized; re-normalizing is a no-op
        // for them and repairs older hand-edited books.
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday in `DD.MM.YYYY` form, validated against the real calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| {
            RoloError::Validation(format!(
                "The date '{}' does not match the format 'DD.MM.YYYY'",
                value
            ))
        })?;
        Ok(Self {
            text: value.to_string(),
            date,
        })
    }

    /// Parse user input where an empty string means "no birthday set".
    pub fn parse(value: &str) -> Result<Option<Self>> {
        if value.is_empty() {
            return Ok(None);
        }
        Self::new(value).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<String> for Birthday {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Birthday::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.text
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
