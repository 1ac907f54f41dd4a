//! Persistence specs
//!
//! Verify the database file lifecycle across separate sessions.

use crate::prelude::*;

#[test]
fn first_run_creates_the_database_file() {
    let lib = Library::empty();
    assert!(!lib.database_path().exists());

    lib.biblio().keys(&["15"]).passes();

    assert!(lib.database_path().is_file());
}

#[test]
fn exit_writes_added_records_to_the_database() {
    let lib = Library::empty();

    lib.biblio().keys(ADD_ADA).keys(&["15"]).passes();

    let text = lib.database_text();
    assert!(text.contains("Ada Lovelace"));
    assert!(text.contains("ada@example.org"));
}

#[test]
fn records_survive_into_the_next_session() {
    let lib = Library::empty();
    lib.biblio().keys(ADD_ADA).keys(ADD_EMMA).keys(&["15"]).passes();

    lib.biblio()
        .keys(&["11", "12", "15"])
        .passes()
        .stdout_has("- Customer 7: Ada Lovelace")
        .stdout_has("- Book 3: \"Emma\" by Jane Austen");
}

#[test]
fn loans_survive_into_the_next_session() {
    let lib = Library::empty();
    lib.biblio()
        .keys(ADD_ADA)
        .keys(ADD_EMMA)
        .keys(LOAN_EMMA_TO_ADA)
        .keys(&["15"])
        .passes();

    lib.biblio()
        .keys(&["9", "3", "15"])
        .passes()
        .stdout_has("Book 3 returned (was due 04.01.2024).");
}

#[test]
fn removal_in_one_session_is_gone_in_the_next() {
    let lib = Library::empty();
    lib.biblio().keys(ADD_ADA).keys(&["15"]).passes();
    lib.biblio().keys(&["4", "7", "15"]).passes();

    lib.biblio()
        .keys(&["11", "15"])
        .passes()
        .stdout_has("No customers.");
}

#[test]
fn sessions_on_separate_paths_do_not_share_state() {
    let first = Library::empty();
    let second = Library::empty();
    first.biblio().keys(ADD_ADA).keys(&["15"]).passes();

    second
        .biblio()
        .keys(&["11", "15"])
        .passes()
        .stdout_has("No customers.");
}
