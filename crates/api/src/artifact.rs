//! Per-request temporary document.
//!
//! An [`InvoiceArtifact`] owns a uniquely named file in the output directory
//! and deletes it when dropped, whatever path the request took.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

#[derive(Debug)]
pub struct InvoiceArtifact {
    path: PathBuf,
    file: Option<File>,
}

impl InvoiceArtifact {
    /// Create `<uuid>.pdf` in `dir`. Never reuses an existing file.
    pub fn create(dir: &Path) -> io::Result<Self> {
        let path = dir.join(format!("{}.pdf", Uuid::now_v7()));
        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        tracing::debug!(path = %path.display(), "invoice artifact created");
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle for writing the document.
    pub fn writer(&self) -> io::Result<&File> {
        self.file
            .as_ref()
            .ok_or_else(|| io::Error::other("artifact already closed"))
    }

    /// Close the write handle and read the finished document back.
    pub fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        std::fs::read(&self.path)
    }
}

impl Drop for InvoiceArtifact {
    fn drop(&mut self) {
        drop(self.file.take());
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "invoice artifact deleted"),
            Err(e) => tracing::warn!(path = %self.path.display(), "deleting invoice artifact failed: {e}"),
        }
    }
}
