// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The numbered action menu

/// One selectable menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddCustomer,
    FindCustomerByName,
    DisplayCustomerLoans,
    DeleteCustomer,
    AddBook,
    FindBooksByName,
    FindBooksByAuthor,
    LoanBook,
    ReturnBook,
    DeleteBook,
    DisplayAllCustomers,
    DisplayAllBooks,
    DisplayAllLoans,
    DisplayAllLateLoans,
    Exit,
}

impl Action {
    /// All actions, in menu order
    pub const ALL: [Action; 15] = [
        Action::AddCustomer,
        Action::FindCustomerByName,
        Action::DisplayCustomerLoans,
        Action::DeleteCustomer,
        Action::AddBook,
        Action::FindBooksByName,
        Action::FindBooksByAuthor,
        Action::LoanBook,
        Action::ReturnBook,
        Action::DeleteBook,
        Action::DisplayAllCustomers,
        Action::DisplayAllBooks,
        Action::DisplayAllLoans,
        Action::DisplayAllLateLoans,
        Action::Exit,
    ];

    /// Stable menu number, starting at 1
    pub fn code(self) -> u8 {
        match self {
            Action::AddCustomer => 1,
            Action::FindCustomerByName => 2,
            Action::DisplayCustomerLoans => 3,
            Action::DeleteCustomer => 4,
            Action::AddBook => 5,
            Action::FindBooksByName => 6,
            Action::FindBooksByAuthor => 7,
            Action::LoanBook => 8,
            Action::ReturnBook => 9,
            Action::DeleteBook => 10,
            Action::DisplayAllCustomers => 11,
            Action::DisplayAllBooks => 12,
            Action::DisplayAllLoans => 13,
            Action::DisplayAllLateLoans => 14,
            Action::Exit => 15,
        }
    }

    /// Action for a menu number, if the number is known
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::AddCustomer => "Add new customer",
            Action::FindCustomerByName => "Find customer by name",
            Action::DisplayCustomerLoans => "Display customer loans",
            Action::DeleteCustomer => "Delete existing customer",
            Action::AddBook => "Add new book",
            Action::FindBooksByName => "Find books by name",
            Action::FindBooksByAuthor => "Find books by author",
            Action::LoanBook => "Loan a book",
            Action::ReturnBook => "Return a book",
            Action::DeleteBook => "Delete existing book",
            Action::DisplayAllCustomers => "Display all customers",
            Action::DisplayAllBooks => "Display all books",
            Action::DisplayAllLoans => "Display all loans",
            Action::DisplayAllLateLoans => "Display all late loans",
            Action::Exit => "Exit",
        }
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
