//! biblio-storage: snapshot persistence for the biblio catalog
//!
//! One JSON file per library, written whole on save and read whole on load.

pub mod snapshot;

pub use snapshot::{Store, StoreError};
