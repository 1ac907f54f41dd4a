// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Customer records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered library customer
///
/// Names carry no uniqueness guarantee; only the id is a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            email: email.into(),
            birth_date,
        }
    }
}
