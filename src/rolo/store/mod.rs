//! Persistence for the contact book.
//!
//! Storage is abstracted behind [`StorageBackend`] so the lifecycle logic
//! and the command layer can be tested against [`memory::MemBackend`]
//! without touching the filesystem, while production runs on
//! [`fs::FileBackend`].
//!
//! [`BookStore`] ties a backend to an in-memory [`ContactBook`] and owns
//! the session lifecycle: `open` ensures the persisted blob exists and
//! merges it into memory, `close` writes everything back. Dropping an
//! unclosed store still flushes, so an error path mid-session cannot lose
//! the book.

use crate::book::ContactBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Raw load/save of the whole persisted book. The store assumes exclusive
/// single-process access; backends do not lock.
pub trait StorageBackend {
    /// True when a persisted blob already exists.
    fn exists(&self) -> bool;

    /// Load the persisted book. Only called after the blob exists.
    fn load(&self) -> Result<ContactBook>;

    /// Overwrite the persisted blob with `book`.
    fn save(&self, book: &ContactBook) -> Result<()>;
}

/// An opened contact store: the in-memory book plus the backend it came
/// from. Acquired once per session with [`BookStore::open`], released with
/// [`BookStore::close`].
pub struct BookStore<B: StorageBackend> {
    book: ContactBook,
    backend: B,
    closed: bool,
}

impl<B: StorageBackend> BookStore<B> {
    /// Open the store: initialize an empty persisted blob if none exists,
    /// then load it and merge into the (empty) in-memory book.
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with(backend, ContactBook::new())
    }

    /// Open with pre-existing in-memory state. Loaded entries are merged
    /// in and win on name collision (load-then-merge, not replace).
    pub fn open_with(backend: B, mut book: ContactBook) -> Result<Self> {
        if !backend.exists() {
            backend.save(&ContactBook::new())?;
        }
        book.merge(backend.load()?);
        Ok(Self {
            book,
            backend,
            closed: false,
        })
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut ContactBook {
        &mut self.book
    }

    /// Flush the current entries without ending the session.
    pub fn flush(&self) -> Result<()> {
        self.backend.save(&self.book)
    }

    /// End the session: serialize the current entries and overwrite the
    /// persisted blob unconditionally.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.backend.save(&self.book)
    }
}

impl<B: StorageBackend> Drop for BookStore<B> {
    fn drop(&mut self) {
        // Best-effort flush for sessions abandoned on an error path; a
        // clean close already wrote and reports its own failures.
        if !self.closed {
            let _ = self.backend.save(&self.book);
        }
    }
}
