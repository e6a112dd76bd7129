use super::StorageBackend;
use crate::book::ContactBook;
use crate::error::{Result, RoloError};
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory storage backend for testing. Does NOT persist data beyond
/// the process; clones share the same blob, which lets a test reopen "the
/// same storage" across sessions.
///
/// `Rc<RefCell<..>>` is enough because rolo is single-threaded.
#[derive(Default, Clone)]
pub struct MemBackend {
    blob: Rc<RefCell<Option<ContactBook>>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail, for error-path testing.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl StorageBackend for MemBackend {
    fn exists(&self) -> bool {
        self.blob.borrow().is_some()
    }

    fn load(&self) -> Result<ContactBook> {
        self.blob
            .borrow()
            .clone()
            .ok_or_else(|| RoloError::Store("No persisted book".to_string()))
    }

    fn save(&self, book: &ContactBook) -> Result<()> {
        if *self.fail_writes.borrow() {
            return Err(RoloError::Store("Simulated write error".to_string()));
        }
        *self.blob.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
