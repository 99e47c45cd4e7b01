use crate::domain::model::RemoveOutcome;
use std::fs;
use std::path::PathBuf;

/// Existence, removal and raw reads of the combined store file.
pub struct StoreRepository {
    destination: PathBuf,
}

impl StoreRepository {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn exists(&self) -> bool {
        self.destination.exists()
    }

    /// Removes the store file. "Nothing to remove" is its own outcome,
    /// distinct from both success and failure.
    pub fn remove(&self) -> RemoveOutcome {
        if !self.exists() {
            return RemoveOutcome::NotFound;
        }
        match fs::remove_file(&self.destination) {
            Ok(()) => RemoveOutcome::Removed,
            Err(e) => RemoveOutcome::Failed(e),
        }
    }

    /// Raw store content for render-time injection. Empty string when the
    /// file is missing or unreadable.
    pub fn content(&self) -> String {
        if !self.exists() {
            return String::new();
        }
        fs::read_to_string(&self.destination).unwrap_or_default()
    }
}
