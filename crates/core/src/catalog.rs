// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The catalog store: owner of all customer, book, and loan records
//!
//! Three ordered mappings keyed by id. Every business rule lives here:
//! unique ids, referential checks, the loan-window limits, and cascading
//! deletes. Each operation validates fully before writing, so a returned
//! error means nothing changed.
//!
//! Iteration order is ascending id, which keeps query results deterministic
//! and stable across a save/load cycle.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::book::{Book, BookId};
use crate::clock::Clock;
use crate::customer::{Customer, CustomerId};
use crate::error::CatalogError;
use crate::loan::Loan;

/// In-memory store for all library records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    customers: BTreeMap<CustomerId, Customer>,
    books: BTreeMap<BookId, Book>,
    loans: BTreeMap<BookId, Loan>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from flat record lists, keying each record by its
    /// own id. Used when restoring a persisted snapshot; the records are
    /// trusted as saved and not re-validated.
    pub fn from_records(customers: Vec<Customer>, books: Vec<Book>, loans: Vec<Loan>) -> Self {
        Self {
            customers: customers.into_iter().map(|c| (c.id, c)).collect(),
            books: books.into_iter().map(|b| (b.id, b)).collect(),
            loans: loans.into_iter().map(|l| (l.book_id, l)).collect(),
        }
    }

    // ---- customers ----

    pub fn add_customer(&mut self, customer: Customer) -> Result<(), CatalogError> {
        if self.customers.contains_key(&customer.id) {
            return Err(CatalogError::DuplicateCustomer(customer.id));
        }
        self.customers.insert(customer.id, customer);
        Ok(())
    }

    pub fn customer_by_id(&self, id: CustomerId) -> Result<&Customer, CatalogError> {
        self.customers
            .get(&id)
            .ok_or_else(|| CatalogError::customer_not_found(id))
    }

    /// First customer with this exact name, in ascending id order.
    ///
    /// Names are not unique; when two customers share one, the lowest id
    /// wins.
    pub fn customer_by_name(&self, name: &str) -> Result<&Customer, CatalogError> {
        self.customers
            .values()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::customer_name_not_found(name))
    }

    /// All loans held by this customer, in ascending book-id order
    pub fn customer_loans(&self, id: CustomerId) -> Result<Vec<&Loan>, CatalogError> {
        self.customer_by_id(id)?;
        Ok(self.loans.values().filter(|l| l.customer_id == id).collect())
    }

    /// Remove a customer together with every loan they hold
    pub fn remove_customer(&mut self, id: CustomerId) -> Result<Customer, CatalogError> {
        let Some(customer) = self.customers.remove(&id) else {
            return Err(CatalogError::customer_not_found(id));
        };
        self.loans.retain(|_, loan| loan.customer_id != id);
        Ok(customer)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    // ---- books ----

    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.books.contains_key(&book.id) {
            return Err(CatalogError::DuplicateBook(book.id));
        }
        self.books.insert(book.id, book);
        Ok(())
    }

    pub fn book_by_id(&self, id: BookId) -> Result<&Book, CatalogError> {
        self.books.get(&id).ok_or(CatalogError::BookNotFound(id))
    }

    pub fn books_by_name(&self, name: &str) -> Vec<&Book> {
        self.books.values().filter(|b| b.name == name).collect()
    }

    pub fn books_by_author(&self, author: &str) -> Vec<&Book> {
        self.books.values().filter(|b| b.author == author).collect()
    }

    /// Remove a book together with any loan keyed by it
    pub fn remove_book(&mut self, id: BookId) -> Result<Book, CatalogError> {
        let Some(book) = self.books.remove(&id) else {
            return Err(CatalogError::BookNotFound(id));
        };
        self.loans.remove(&id);
        Ok(book)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    // ---- loans ----

    pub fn is_book_loaned(&self, id: BookId) -> bool {
        self.loans.contains_key(&id)
    }

    /// Loan a book to a customer for the given window.
    ///
    /// Checks run in a fixed order so callers see consistent errors:
    /// customer exists, book exists, book not already out, dates ordered,
    /// window within the book class maximum (exactly at the maximum is
    /// allowed). Nothing is written until every check has passed.
    pub fn loan_book(
        &mut self,
        customer_id: CustomerId,
        book_id: BookId,
        loan_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<&Loan, CatalogError> {
        if !self.customers.contains_key(&customer_id) {
            return Err(CatalogError::customer_not_found(customer_id));
        }
        let book = self
            .books
            .get(&book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;
        if self.loans.contains_key(&book_id) {
            return Err(CatalogError::AlreadyLoaned(book_id));
        }
        if return_date < loan_date {
            return Err(CatalogError::InvalidDateRange {
                loan_date,
                return_date,
            });
        }
        let max = book.max_loan_duration();
        if return_date - loan_date > max {
            return Err(CatalogError::LoanTooLong {
                book_id,
                max_days: max.num_days(),
            });
        }
        let loan = Loan::new(customer_id, book_id, loan_date, return_date);
        Ok(self.loans.entry(book_id).or_insert(loan))
    }

    /// Close out a loan, returning the removed record
    pub fn return_book(&mut self, book_id: BookId) -> Result<Loan, CatalogError> {
        if !self.books.contains_key(&book_id) {
            return Err(CatalogError::BookNotFound(book_id));
        }
        self.loans
            .remove(&book_id)
            .ok_or(CatalogError::NotLoaned(book_id))
    }

    pub fn loan(&self, book_id: BookId) -> Result<&Loan, CatalogError> {
        self.loans.get(&book_id).ok_or(CatalogError::NotLoaned(book_id))
    }

    pub fn loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values()
    }

    /// Loans whose return date has already passed, judged against the
    /// clock's current day at call time. Lateness is never persisted.
    pub fn late_loans(&self, clock: &impl Clock) -> Vec<&Loan> {
        let today = clock.today();
        self.loans.values().filter(|l| l.is_late(today)).collect()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
