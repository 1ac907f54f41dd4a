// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loan records
//!
//! A loan is keyed by the loaned book's id, so a book can be out at most
//! once at a time. Loans reference their customer and book by id only; the
//! catalog guarantees both exist when the loan is created.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::book::BookId;
use crate::customer::CustomerId;

/// An outstanding loan of one book to one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub customer_id: CustomerId,
    pub book_id: BookId,
    pub loan_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl Loan {
    pub fn new(
        customer_id: CustomerId,
        book_id: BookId,
        loan_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Self {
        Self {
            customer_id,
            book_id,
            loan_date,
            return_date,
        }
    }

    /// Length of the loan window
    pub fn window(&self) -> Duration {
        self.return_date - self.loan_date
    }

    /// A loan is late once the current day is past its return date.
    /// On the return date itself it is still on time.
    pub fn is_late(&self, today: NaiveDate) -> bool {
        today > self.return_date
    }
}

#[cfg(test)]
#[path = "loan_tests.rs"]
mod tests;
