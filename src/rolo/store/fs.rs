use super::StorageBackend;
use crate::book::ContactBook;
use crate::error::{Result, RoloError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: the whole book as pretty-printed JSON in a single
/// file. Writes go to a sibling temp file first and are renamed into
/// place, so a crash mid-write leaves the previous blob intact.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<ContactBook> {
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let book: ContactBook =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(book)
    }

    fn save(&self, book: &ContactBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(RoloError::Io)?;
        fs::rename(&tmp, &self.path).map_err(RoloError::Io)?;
        Ok(())
    }
}
