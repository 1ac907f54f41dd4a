//! Session transcript specs
//!
//! Pin the exact byte-for-byte stdout of short sessions, prompts included.
//! Captured output carries no input echo, so consecutive prompts run
//! together on one line.

use similar_asserts::assert_eq;

use crate::prelude::*;

const MENU: &str = "
========== [ Home Library ] ==========
  1. Add new customer
  2. Find customer by name
  3. Display customer loans
  4. Delete existing customer
  5. Add new book
  6. Find books by name
  7. Find books by author
  8. Loan a book
  9. Return a book
 10. Delete existing book
 11. Display all customers
 12. Display all books
 13. Display all loans
 14. Display all late loans
 15. Exit
";

#[test]
fn empty_library_session_transcript() {
    let lib = Library::empty();

    let output = lib.biblio().keys(&["11", "15"]).passes().stdout_text();

    let expected = format!(
        "{MENU}> Enter action number: \n\
         --- Display all customers ---\n\
         No customers.\n\
         {MENU}> Enter action number: Library saved.\n"
    );
    assert_eq!(expected, output);
}

#[test]
fn add_customer_session_transcript() {
    let lib = Library::empty();

    let output = lib.biblio().keys(ADD_ADA).keys(&["15"]).passes().stdout_text();

    let expected = format!(
        "{MENU}> Enter action number: \n\
         --- Add new customer ---\n\
         > Enter customer id: \
         > Enter customer name: \
         > Enter address: \
         > Enter email: \
         > Enter birth date: \
         Customer 7 (Ada Lovelace) added.\n\
         {MENU}> Enter action number: Library saved.\n"
    );
    assert_eq!(expected, output);
}
