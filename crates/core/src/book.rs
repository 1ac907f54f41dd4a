// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Book records and the loan-duration classes they belong to

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub u32);

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loan-duration class of a book
///
/// Each class carries a fixed maximum loan window and a stable numeric code
/// used at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookType {
    Basic,
    Standard,
    Important,
}

impl BookType {
    /// All classes, in menu display order
    pub const ALL: [BookType; 3] = [BookType::Basic, BookType::Standard, BookType::Important];

    /// Stable numeric code for this class
    pub fn code(self) -> u8 {
        match self {
            BookType::Basic => 1,
            BookType::Standard => 2,
            BookType::Important => 3,
        }
    }

    /// Class for a numeric code, if the code is known
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BookType::Basic),
            2 => Some(BookType::Standard),
            3 => Some(BookType::Important),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BookType::Basic => "Basic",
            BookType::Standard => "Standard",
            BookType::Important => "Important",
        }
    }

    /// Longest time a book of this class may stay on loan
    pub fn max_loan_duration(self) -> Duration {
        match self {
            BookType::Basic => Duration::days(10),
            BookType::Standard => Duration::days(5),
            BookType::Important => Duration::days(2),
        }
    }

    /// One-line summary of code, name, and loan window
    pub fn description(self) -> String {
        format!(
            "Number: {}, Name: {}, Time: {} day(s)",
            self.code(),
            self.name(),
            self.max_loan_duration().num_days()
        )
    }
}

impl std::fmt::Display for BookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub kind: BookType,
    pub name: String,
    pub author: String,
    pub date_published: NaiveDate,
}

impl Book {
    pub fn new(
        id: BookId,
        kind: BookType,
        name: impl Into<String>,
        author: impl Into<String>,
        date_published: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            author: author.into(),
            date_published,
        }
    }

    /// Longest loan window allowed for this book, derived from its class
    pub fn max_loan_duration(&self) -> Duration {
        self.kind.max_loan_duration()
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;
