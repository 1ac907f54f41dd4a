// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-state snapshot persistence for the catalog
//!
//! The catalog's three mappings are written as one pretty-printed JSON file
//! holding flat record lists, so the on-disk layout stays independent of
//! the in-memory representation. The file lives at `<base>.json`. Opening a
//! store against an absent file writes an empty snapshot immediately, so
//! later loads succeed deterministically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use biblio_core::{Book, Catalog, Customer, Loan};

/// Suffix appended to the configured base path
const SNAPSHOT_SUFFIX: &str = ".json";

/// Errors that can occur while loading or saving a snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the snapshot file backing one catalog
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store backed by `<base>.json`, creating an empty snapshot
    /// on first run. Returns the handle and the loaded catalog.
    pub fn open(base: impl Into<PathBuf>) -> Result<(Self, Catalog), StoreError> {
        let store = Self {
            path: snapshot_path(base),
        };
        if store.path.exists() {
            let catalog = store.load()?;
            Ok((store, catalog))
        } else {
            let catalog = Catalog::new();
            store.save(&catalog)?;
            Ok((store, catalog))
        }
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the catalog's full state, replacing any previous snapshot
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&Snapshot::capture(catalog))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read the full state back from the snapshot file
    pub fn load(&self) -> Result<Catalog, StoreError> {
        let json = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&json)?;
        Ok(snapshot.restore())
    }
}

fn snapshot_path(base: impl Into<PathBuf>) -> PathBuf {
    let mut path = base.into().into_os_string();
    path.push(SNAPSHOT_SUFFIX);
    PathBuf::from(path)
}

/// Serialized form of the catalog: three flat record lists
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    customers: Vec<Customer>,
    books: Vec<Book>,
    loans: Vec<Loan>,
}

impl Snapshot {
    fn capture(catalog: &Catalog) -> Self {
        Self {
            customers: catalog.customers().cloned().collect(),
            books: catalog.books().cloned().collect(),
            loans: catalog.loans().cloned().collect(),
        }
    }

    fn restore(self) -> Catalog {
        Catalog::from_records(self.customers, self.books, self.loans)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
