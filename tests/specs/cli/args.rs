//! CLI surface specs
//!
//! Verify argument handling for the biblio binary.

use crate::prelude::*;

#[test]
fn version_flag_prints_package_name() {
    let lib = Library::empty();

    lib.biblio().args(&["--version"]).passes().stdout_has("biblio");
}

#[test]
fn help_flag_lists_options() {
    let lib = Library::empty();

    lib.biblio()
        .args(&["--help"])
        .passes()
        .stdout_has("--name")
        .stdout_has("--data");
}

#[test]
fn unknown_flag_is_rejected() {
    let lib = Library::empty();

    lib.biblio()
        .args(&["--bogus"])
        .fails()
        .stderr_has("unexpected argument");
}

#[test]
fn banner_names_the_library() {
    let lib = Library::empty();

    lib.biblio()
        .args(&["--name", "Riverside"])
        .keys(&["15"])
        .passes()
        .stdout_has("========== [ Riverside Library ] ==========");
}

#[test]
fn banner_defaults_to_home() {
    let lib = Library::empty();

    lib.biblio()
        .keys(&["15"])
        .passes()
        .stdout_has("========== [ Home Library ] ==========");
}

#[test]
fn end_of_input_exits_and_saves() {
    let lib = Library::empty();

    lib.biblio().passes().stdout_has("Library saved.");
    assert!(lib.database_path().is_file());
}
