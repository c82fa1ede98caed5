//! Typed failures surfaced at the store boundary
//!
//! Every variant is recoverable: the UI presents the message and lets
//! the user retry. Nothing here aborts the process.

use thiserror::Error;

/// Store operation failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("list name must not be empty")]
    EmptyName,

    #[error("an army list named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("'{nation}' is not a known nation")]
    InvalidNation { nation: String },

    #[error("'{theater_selector}' is not a theater selector for {nation}")]
    InvalidTheater {
        nation: String,
        theater_selector: String,
    },

    #[error("no army lists selected")]
    EmptySelection,

    #[error("current list '{name}' is in the selection; no lists deleted")]
    CurrentListProtected { name: String },

    #[error("no army list named '{name}'")]
    UnknownList { name: String },

    /// Read/write failure on the persistence backend. On save the
    /// in-memory document is kept so the caller can retry.
    #[error("army list storage unavailable")]
    StorageUnavailable {
        #[source]
        source: anyhow::Error,
    },
}
