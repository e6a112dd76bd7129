use crate::field::{Birthday, Name, Phone};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Result of [`Record::change_phone`]. "Phone not there" is an expected
/// user-facing condition, so it travels as a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    Replaced { old: Phone, new: Phone },
    NoSuchPhone(Phone),
}

/// Result of [`Record::remove_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Phone),
    NoSuchPhone(Phone),
}

/// One contact: a name, its phones in the order they were added, and an
/// optional birthday. The name is the record's identity and never changes;
/// phones may repeat, the model does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phones: vec![phone],
            birthday: None,
        }
    }

    pub fn add_phone(&mut self, phones: impl IntoIterator<Item = Phone>) {
        self.phones.extend(phones);
    }

    /// Replace the first phone equal to `old` with `new`. Both values are
    /// already normalized, so equality is plain string equality.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> ChangeOutcome {
        match self.phones.iter_mut().find(|p| *p == old) {
            Some(slot) => {
                let new_clone = new.clone();
                *slot = new;
                ChangeOutcome::Replaced {
                    old: old.clone(),
                    new: new_clone,
                }
            }
            None => ChangeOutcome::NoSuchPhone(old.clone()),
        }
    }

    /// Remove the first phone equal to `target`.
    pub fn remove_phone(&mut self, target: &Phone) -> RemoveOutcome {
        match self.phones.iter().position(|p| p == target) {
            Some(pos) => RemoveOutcome::Removed(self.phones.remove(pos)),
            None => RemoveOutcome::NoSuchPhone(target.clone()),
        }
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Days from `today` until the next occurrence of the birthday's
    /// month-day: 0 on the birthday itself, `None` when no birthday is set.
    ///
    /// A Feb 29 birthday is observed on Mar 1 in non-leap years.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let date = birthday.date();

        let mut next = occurrence_in_year(date, today.year());
        if next < today {
            next = occurrence_in_year(date, today.year() + 1);
        }
        Some((next - today).num_days())
    }
}

fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        // Only Feb 29 can fail to land in a given year; observe it on Mar 1.
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Birthday;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn phone(raw: &str) -> Phone {
        Phone::new(raw).unwrap()
    }

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_phone_appends_in_order_and_keeps_duplicates() {
        let mut rec = record("Ann");
        rec.add_phone([phone("0501234567"), phone("0671112233")]);
        rec.add_phone([phone("0501234567")]);
        assert_eq!(
            rec.phones.iter().map(Phone::as_str).collect::<Vec<_>>(),
            ["+380501234567", "+380671112233", "+380501234567"]
        );
    }

    #[test]
    fn change_phone_replaces_first_match_in_place() {
        let mut rec = record("Ann");
        rec.add_phone([phone("0501234567"), phone("0501234567")]);

        let outcome = rec.change_phone(&phone("+380501234567"), phone("0671112233"));
        assert!(matches!(outcome, ChangeOutcome::Replaced { .. }));
        assert_eq!(rec.phones[0].as_str(), "+380671112233");
        assert_eq!(rec.phones[1].as_str(), "+380501234567");
    }

    #[test]
    fn change_phone_reports_missing_number() {
        let mut rec = record("Ann");
        rec.add_phone([phone("0501234567")]);

        let missing = phone("0009998877");
        let outcome = rec.change_phone(&missing, phone("0671112233"));
        assert_eq!(outcome, ChangeOutcome::NoSuchPhone(missing));
        assert_eq!(rec.phones[0].as_str(), "+380501234567");
    }

    #[test]
    fn remove_phone_takes_first_match_only() {
        let mut rec = record("Ann");
        rec.add_phone([phone("0501234567"), phone("0501234567")]);

        let outcome = rec.remove_phone(&phone("0501234567"));
        assert!(matches!(outcome, RemoveOutcome::Removed(_)));
        assert_eq!(rec.phones.len(), 1);

        rec.remove_phone(&phone("0501234567"));
        let outcome = rec.remove_phone(&phone("0501234567"));
        assert!(matches!(outcome, RemoveOutcome::NoSuchPhone(_)));
    }

    #[test]
    fn days_to_birthday_is_none_when_unset() {
        let rec = record("Ann");
        assert_eq!(rec.days_to_birthday(date(1, 6, 2026)), None);
    }

    #[test]
    fn days_to_birthday_is_zero_on_the_day() {
        let mut rec = record("Ann");
        rec.set_birthday(Some(Birthday::new("15.06.1990").unwrap()));
        assert_eq!(rec.days_to_birthday(date(15, 6, 2026)), Some(0));
    }

    #[test]
    fn upcoming_birthday_counts_within_the_year() {
        let mut rec = record("Ann");
        rec.set_birthday(Some(Birthday::new("15.06.1990").unwrap()));
        assert_eq!(rec.days_to_birthday(date(1, 6, 2026)), Some(14));
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let mut rec = record("Ann");
        rec.set_birthday(Some(Birthday::new("15.06.1990").unwrap()));
        // 16.06.2026 -> 15.06.2027; 2026 has no leap day in between.
        assert_eq!(rec.days_to_birthday(date(16, 6, 2026)), Some(364));
    }

    #[test]
    fn leap_day_birthday_observed_on_march_first() {
        let mut rec = record("Ann");
        rec.set_birthday(Some(Birthday::new("29.02.2000").unwrap()));
        assert_eq!(rec.days_to_birthday(date(28, 2, 2026)), Some(1));
        // In a leap year the real date is used.
        assert_eq!(rec.days_to_birthday(date(29, 2, 2028)), Some(0));
    }

    #[test]
    fn days_to_birthday_is_never_negative_across_a_year() {
        let mut rec = record("Ann");
        rec.set_birthday(Some(Birthday::new("15.06.1990").unwrap()));
        let mut day = date(1, 1, 2026);
        let end = date(1, 1, 2027);
        while day < end {
            let days = rec.days_to_birthday(day).unwrap();
            assert!(days >= 0, "negative count on {}", day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn record_survives_json_round_trip() {
        let mut rec = record("Ann");
        rec.add_phone([phone("0501234567")]);
        rec.set_birthday(Some(Birthday::new("15.06.1990").unwrap()));

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name.as_str(), "Ann");
        assert_eq!(back.phones, rec.phones);
        assert_eq!(back.birthday, rec.birthday);
    }
}
