//! The API facade: one entry point for every contact-book operation,
//! generic over the storage backend so clients and tests choose between
//! [`FileBackend`](crate::store::fs::FileBackend) and
//! [`MemBackend`](crate::store::memory::MemBackend). The facade dispatches
//! to the command modules and owns nothing else; business logic lives in
//! [`crate::commands`], presentation in the binary.

use crate::book::Pages;
use crate::commands;
use crate::error::Result;
use crate::store::{BookStore, StorageBackend};
use chrono::Local;

pub struct RoloApi<B: StorageBackend> {
    store: BookStore<B>,
}

impl<B: StorageBackend> RoloApi<B> {
    /// Open the store and wrap it. Fails only on storage trouble.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: BookStore::open(backend)?,
        })
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(self.store.book_mut(), name, phone)
    }

    pub fn change(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::change::run(self.store.book_mut(), name, old, new)
    }

    pub fn remove(&mut self, name: &str, phone: Option<&str>) -> Result<commands::CmdResult> {
        commands::remove::run(self.store.book_mut(), name, phone)
    }

    pub fn find(&self, fragment: &str) -> Result<commands::CmdResult> {
        commands::find::run(self.store.book(), fragment)
    }

    pub fn show_all(&self, page_size: usize) -> Result<Pages> {
        commands::show::run(self.store.book(), page_size)
    }

    pub fn birthday(&mut self, name: &str, date: Option<&str>) -> Result<commands::CmdResult> {
        commands::birthday::run(
            self.store.book_mut(),
            name,
            date,
            Local::now().date_naive(),
        )
    }

    /// Close the session, flushing the book to storage.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    #[test]
    fn facade_routes_to_the_commands() {
        let backend = MemBackend::new();
        let mut api = RoloApi::open(backend.clone()).unwrap();

        api.add("Ann", "0501234567").unwrap();
        api.change("Ann", "+380501234567", "0671112233").unwrap();
        let found = api.find("Ann").unwrap();
        assert_eq!(found.listed.len(), 1);
        assert_eq!(found.listed[0].1.phones[0].as_str(), "+380671112233");

        let pages: Vec<_> = api.show_all(2).unwrap().collect();
        assert_eq!(pages.len(), 1);

        api.close().unwrap();
        assert!(backend.exists());
    }
}
