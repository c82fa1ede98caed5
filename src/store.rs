//! Army list store: canonical in-memory document plus CRUD operations
//!
//! The store owns the `Document` exclusively. Collaborators read it
//! through [`ArmyListStore::document`] and route every write through a
//! store operation; after each successful mutation the store writes the
//! document through to the backend and notifies subscribers so the UI
//! can re-render. Single-threaded by design: operations run to
//! completion before the next is invoked.

use std::collections::BTreeSet;
use tracing::{error, info};

use crate::catalog;
use crate::document::{ArmyList, Document};
use crate::error::StoreError;
use crate::storage::JsonStore;

/// Callback invoked with the new document after every successful mutation
pub type ChangeObserver = Box<dyn FnMut(&Document)>;

/// Owner of the canonical army list document
pub struct ArmyListStore {
    document: Document,
    backend: JsonStore,
    observers: Vec<ChangeObserver>,
}

impl ArmyListStore {
    /// Open the store, loading the document from `backend`
    ///
    /// Never fails: a missing or unreadable document falls back to the
    /// built-in default.
    pub fn open(backend: JsonStore) -> Self {
        let document = backend.load();
        Self {
            document,
            backend,
            observers: Vec::new(),
        }
    }

    /// Read-only snapshot of the current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Register an observer for document-changed notifications
    pub fn subscribe(&mut self, observer: impl FnMut(&Document) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Write the current document through to the backend
    ///
    /// Used to retry after a mutation returned `StorageUnavailable`.
    pub fn save(&self) -> Result<(), StoreError> {
        self.backend.save(&self.document)
    }

    /// Create a new, empty army list with the given nation and theater
    pub fn create_list(
        &mut self,
        name: &str,
        nationality: &str,
        theater_selector: &str,
    ) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.document.lists.contains_key(name) {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }
        if !catalog::is_nation(nationality) {
            return Err(StoreError::InvalidNation {
                nation: nationality.to_string(),
            });
        }
        if !catalog::is_theater_selector(nationality, theater_selector) {
            return Err(StoreError::InvalidTheater {
                nation: nationality.to_string(),
                theater_selector: theater_selector.to_string(),
            });
        }

        self.document.lists.insert(
            name.to_string(),
            ArmyList::template(nationality, theater_selector),
        );
        info!(list = %name, nation = %nationality, theater = %theater_selector, "created army list");
        self.commit()
    }

    /// Delete every list named in `names`
    ///
    /// Rejected as a whole if the selection is empty or contains the
    /// current list; a protected selection deletes nothing, even when
    /// other names in it were deletable. Names not present in the
    /// document are ignored.
    pub fn delete_lists(&mut self, names: &BTreeSet<String>) -> Result<(), StoreError> {
        if names.is_empty() {
            return Err(StoreError::EmptySelection);
        }
        let current = &self.document.session.current_list;
        if names.contains(current) {
            return Err(StoreError::CurrentListProtected {
                name: current.clone(),
            });
        }

        for name in names {
            self.document.lists.remove(name);
        }
        info!(deleted = names.len(), remaining = self.document.lists.len(), "deleted army lists");
        self.commit()
    }

    /// Switch the current list
    ///
    /// Setting the name that is already current is a no-op: no write,
    /// no notification.
    pub fn set_current_list(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.document.lists.contains_key(name) {
            return Err(StoreError::UnknownList {
                name: name.to_string(),
            });
        }
        if self.document.session.current_list == name {
            return Ok(());
        }

        self.document.session.current_list = name.to_string();
        info!(list = %name, "switched current army list");
        self.commit()
    }

    /// Write-through and notify after a successful in-memory mutation.
    /// A failed write keeps the mutation in memory and still notifies;
    /// the caller retries with `save`.
    fn commit(&mut self) -> Result<(), StoreError> {
        let result = self.backend.save(&self.document);
        if let Err(e) = &result {
            error!(error = %e, "write-through failed, document kept in memory");
        }
        for observer in &mut self.observers {
            observer(&self.document);
        }
        result
    }
}
