//! The in-memory contact collection: a name-keyed map of [`Record`]s plus
//! the operations the command layer is built on. Persistence lives in
//! [`crate::store`]; the book itself never touches the filesystem.

use crate::error::{Result, RoloError};
use crate::field::{Name, Phone};
use crate::model::{ChangeOutcome, Record, RemoveOutcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of [`ContactBook::add`]: the same command either creates a
/// contact or grows an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    PhoneAppended,
}

/// Name-keyed contact collection. Keys are unique; iteration order is the
/// key order, which makes search results and pagination snapshots
/// deterministic between calls.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    entries: BTreeMap<String, Record>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(name, rec)| (name.as_str(), rec))
    }

    /// Insert-or-append: a known name gets the phone appended to its
    /// record, an unknown name gets a fresh record holding the phone.
    pub fn add(&mut self, name: Name, phone: Phone) -> AddOutcome {
        match self.entries.get_mut(name.as_str()) {
            Some(record) => {
                record.add_phone([phone]);
                AddOutcome::PhoneAppended
            }
            None => {
                let key = name.as_str().to_string();
                self.entries.insert(key, Record::with_phone(name, phone));
                AddOutcome::Created
            }
        }
    }

    /// Put a whole record in, replacing any record under the same name.
    pub fn insert(&mut self, record: Record) {
        self.entries
            .insert(record.name.as_str().to_string(), record);
    }

    /// Replace `old` with `new` on the named contact. A missing contact is
    /// an error; a missing phone on an existing contact is an outcome.
    pub fn change(&mut self, name: &str, old: &Phone, new: Phone) -> Result<ChangeOutcome> {
        let record = self
            .entries
            .get_mut(name)
            .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
        Ok(record.change_phone(old, new))
    }

    pub fn remove_phone(&mut self, name: &str, target: &Phone) -> Result<RemoveOutcome> {
        let record = self
            .entries
            .get_mut(name)
            .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
        Ok(record.remove_phone(target))
    }

    /// Remove a whole contact, returning its record.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        self.entries
            .remove(name)
            .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))
    }

    /// Absorb another map of entries. Incoming records win on key
    /// collision; this is the load-then-merge half of the store lifecycle.
    pub fn merge(&mut self, other: ContactBook) {
        self.entries.extend(other.entries);
    }

    /// Substring search: case-insensitive against names, case-sensitive
    /// against normalized phone values (names are free text, phones are
    /// canonical digit strings). Results come back in store order.
    pub fn find(&self, fragment: &str) -> Vec<(String, Record)> {
        let fragment_lower = fragment.to_lowercase();
        self.entries
            .iter()
            .filter(|(name, record)| {
                name.to_lowercase().contains(&fragment_lower)
                    || record.phones.iter().any(|p| p.as_str().contains(fragment))
            })
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect()
    }

    /// Start a paginated traversal over a snapshot of the current entries.
    /// The snapshot is taken here, so mutating the book mid-traversal can
    /// neither skip nor duplicate records; a fresh call gives a fresh
    /// snapshot.
    pub fn pages(&self, page_size: usize) -> Pages {
        assert!(page_size > 0, "page_size must be positive");
        Pages {
            entries: self
                .entries
                .iter()
                .map(|(name, record)| (name.clone(), record.clone()))
                .collect(),
            page_size,
            next_start: 0,
        }
    }
}

/// One page of a traversal: up to `page_size` (name, record) pairs in
/// snapshot order.
pub type Page = Vec<(String, Record)>;

/// Pull-based pagination cursor, detached from the book it was made from.
///
/// Yields `ceil(N / page_size)` pages and then `None`; an empty snapshot
/// yields no pages at all. A spent cursor stays spent, restarting means
/// calling [`ContactBook::pages`] again.
pub struct Pages {
    entries: Vec<(String, Record)>,
    page_size: usize,
    next_start: usize,
}

impl Pages {
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages this traversal will yield, regardless of how many have
    /// been consumed already.
    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(self.page_size)
    }
}

impl Iterator for Pages {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        if self.next_start >= self.entries.len() {
            return None;
        }
        let end = usize::min(self.next_start + self.page_size, self.entries.len());
        let page = self.entries[self.next_start..end].to_vec();
        self.next_start = end;
        Some(page)
    }
}
