//! Shared helpers for biblio specs
//!
//! Each spec gets an isolated library in a temp dir and drives the real
//! binary with a scripted stdin. Assertions read captured stdout/stderr.

use std::path::PathBuf;

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use tempfile::TempDir;

/// Key sequence that adds customer 7, Ada Lovelace
pub const ADD_ADA: &[&str] = &[
    "1",
    "7",
    "Ada Lovelace",
    "12 Crescent",
    "ada@example.org",
    "10.12.1815",
];

/// Key sequence that adds book 3, "Emma" (Standard, max 5 days)
pub const ADD_EMMA: &[&str] = &["5", "3", "2", "Emma", "Jane Austen", "23.12.1815"];

/// Key sequence that loans book 3 to customer 7 for three days
pub const LOAN_EMMA_TO_ADA: &[&str] = &["8", "3", "7", "01.01.2024", "04.01.2024"];

/// One isolated library: a temp dir holding its database file
pub struct Library {
    dir: TempDir,
}

impl Library {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.dir.path().join("library.json")
    }

    pub fn database_text(&self) -> String {
        std::fs::read_to_string(self.database_path()).unwrap()
    }

    /// A session against this library's database
    pub fn biblio(&self) -> Session {
        let mut cmd = Command::cargo_bin("biblio").unwrap();
        cmd.current_dir(self.dir.path());
        cmd.arg("--data").arg(self.dir.path().join("library"));
        Session {
            cmd,
            keys: String::new(),
        }
    }
}

pub struct Session {
    cmd: Command,
    keys: String,
}

impl Session {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Append menu entries to the scripted stdin, one per line
    pub fn keys(mut self, lines: &[&str]) -> Self {
        for line in lines {
            self.keys.push_str(line);
            self.keys.push('\n');
        }
        self
    }

    pub fn passes(mut self) -> Checked {
        Checked {
            assert: self.cmd.write_stdin(self.keys).assert().success(),
        }
    }

    pub fn fails(mut self) -> Checked {
        Checked {
            assert: self.cmd.write_stdin(self.keys).assert().failure(),
        }
    }
}

pub struct Checked {
    assert: Assert,
}

impl Checked {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }

    fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout_text();
        assert!(
            stdout.contains(needle),
            "stdout missing {needle:?}\n--- stdout ---\n{stdout}"
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout_text();
        assert!(
            !stdout.contains(needle),
            "stdout unexpectedly has {needle:?}\n--- stdout ---\n{stdout}"
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr_text();
        assert!(
            stderr.contains(needle),
            "stderr missing {needle:?}\n--- stderr ---\n{stderr}"
        );
        self
    }
}
