// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed errors for catalog operations
//!
//! One flat variant per failure kind. Callers branch on the kind, never on
//! a hierarchy; `category` reports which domain area a kind belongs to when
//! a coarser grouping is wanted.

use chrono::NaiveDate;
use thiserror::Error;

use crate::book::BookId;
use crate::customer::CustomerId;

/// Domain area a catalog error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Customer,
    Book,
    Loan,
}

/// Why a catalog operation was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The key is the failed lookup rendered for display: a bare id, or a
    /// quoted name for name-based lookups.
    #[error("customer {key} not found")]
    CustomerNotFound { key: String },

    #[error("customer {0} already exists")]
    DuplicateCustomer(CustomerId),

    #[error("book {0} not found")]
    BookNotFound(BookId),

    #[error("book {0} already exists")]
    DuplicateBook(BookId),

    #[error("book {0} is already loaned out")]
    AlreadyLoaned(BookId),

    #[error("book {0} is not on loan")]
    NotLoaned(BookId),

    #[error("return date {return_date} is before loan date {loan_date}")]
    InvalidDateRange {
        loan_date: NaiveDate,
        return_date: NaiveDate,
    },

    #[error("book {book_id} may be loaned for at most {max_days} day(s)")]
    LoanTooLong { book_id: BookId, max_days: i64 },
}

impl CatalogError {
    pub fn customer_not_found(id: CustomerId) -> Self {
        CatalogError::CustomerNotFound { key: id.to_string() }
    }

    pub fn customer_name_not_found(name: &str) -> Self {
        CatalogError::CustomerNotFound {
            key: format!("{name:?}"),
        }
    }

    /// Domain area of this error kind
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::CustomerNotFound { .. } | CatalogError::DuplicateCustomer(_) => {
                ErrorCategory::Customer
            }
            CatalogError::BookNotFound(_) | CatalogError::DuplicateBook(_) => ErrorCategory::Book,
            CatalogError::AlreadyLoaned(_)
            | CatalogError::NotLoaned(_)
            | CatalogError::InvalidDateRange { .. }
            | CatalogError::LoanTooLong { .. } => ErrorCategory::Loan,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
