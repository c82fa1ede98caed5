//! JSON persistence backend for the army list document
//!
//! The document lives in a single JSON file under the platform data
//! directory. Output is deterministic: 4-space indentation, list keys
//! in lexicographic order, stable field order. Saving an unchanged
//! document produces identical bytes, so repeated round-trips are
//! byte-stable (matching the `indent=4, sort_keys=True` output of
//! earlier releases).

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::document::Document;
use crate::error::StoreError;

/// Handle to the on-disk document
///
/// The file handle itself is scoped to each call: acquired, read or
/// written, and released before returning.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Backend at an explicit path (tests and tooling)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the application data directory
    pub fn open_default() -> Self {
        Self::at(Self::default_path())
    }

    /// `<platform data dir>/company-commander/army_list.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::storage::APP_DIR);
        path.push(crate::constants::storage::FILENAME);
        path
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the stored document, falling back to the built-in default
    /// on a missing, unreadable, or inconsistent file. Never fails.
    pub fn load(&self) -> Document {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no stored document, starting from defaults");
                return Document::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read stored document, starting from defaults");
                return Document::default();
            }
        };

        match serde_json::from_str::<Document>(&contents) {
            Ok(document) if document.is_consistent() => {
                info!(path = %self.path.display(), lists = document.lists.len(), "loaded army list document");
                document
            }
            Ok(_) => {
                warn!(path = %self.path.display(), "stored document violates invariants, starting from defaults");
                Document::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to parse stored document, starting from defaults");
                Document::default()
            }
        }
    }

    /// Write the document through to disk
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        self.write(document)
            .map_err(|source| StoreError::StorageUnavailable { source })
    }

    fn write(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create data directory {}", parent.display()))?;
        }
        let bytes = to_json_bytes(document).context("failed to serialize army list document")?;
        fs::write(&self.path, bytes)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        info!(path = %self.path.display(), lists = document.lists.len(), "saved army list document");
        Ok(())
    }
}

/// Serialize with 4-space indentation
fn to_json_bytes(document: &Document) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(buf)
}
