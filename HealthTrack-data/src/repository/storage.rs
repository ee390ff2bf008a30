use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::models::HealthDocument;
use super::errors::RepositoryError;

/// JSON file persistence for the health document
///
/// The whole document lives in one UTF-8 JSON file. `save` rewrites the
/// file in full on every call; there is no partial write or atomic-rename
/// protection.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage handle for the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document from disk
    ///
    /// A missing file is the empty store and yields a default document. A
    /// file that exists but cannot be parsed into a document yields
    /// `RepositoryError::Malformed`; the caller is expected to treat that
    /// as fatal rather than overwrite the user's data.
    pub fn load(&self) -> Result<HealthDocument, RepositoryError> {
        if !self.path.exists() {
            debug!("Document file {} not found, starting empty", self.path.display());
            return Ok(HealthDocument::default());
        }

        debug!("Loading health document from {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;

        serde_json::from_str(&contents).map_err(|e| {
            error!("Document file {} is not a valid health document: {}", self.path.display(), e);
            RepositoryError::Malformed(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Write the document back to disk, replacing the previous contents
    pub fn save(&self, document: &HealthDocument) -> Result<(), RepositoryError> {
        debug!("Saving health document to {}", self.path.display());
        let json = serde_json::to_string_pretty(document)?;

        fs::write(&self.path, json).map_err(|e| {
            error!("Failed to write document file {}: {}", self.path.display(), e);
            RepositoryError::Io(e)
        })
    }
}
