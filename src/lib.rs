#![forbid(unsafe_code)]

//! Persistent store for named army lists
//!
//! The store owns the canonical [`Document`], validates mutations
//! against the nation/theater catalog, writes through to a JSON file in
//! the application data directory, and notifies subscribers after every
//! successful mutation. UI layers consume this crate as a collaborator:
//! they read the document, invoke store operations, and re-render on
//! change notifications.

pub mod catalog;
pub mod constants;
pub mod document;
pub mod error;
pub mod storage;
pub mod store;

pub use document::{ArmyList, Document, Hq, Session};
pub use error::StoreError;
pub use storage::JsonStore;
pub use store::ArmyListStore;
