//! biblio-core: domain layer for the biblio library-management tool
//!
//! This crate provides:
//! - Immutable value records for customers, books, and loans
//! - The catalog store owning all records and enforcing the loan rules
//! - Typed catalog errors grouped by domain area
//! - A clock abstraction so date-sensitive queries are testable

pub mod book;
pub mod catalog;
pub mod clock;
pub mod customer;
pub mod error;
pub mod loan;

// Re-exports
pub use book::{Book, BookId, BookType};
pub use catalog::Catalog;
pub use clock::{Clock, FakeClock, SystemClock};
pub use customer::{Customer, CustomerId};
pub use error::{CatalogError, ErrorCategory};
pub use loan::Loan;
