// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented prompting over any reader/writer pair
//!
//! Every prompt re-asks until it reads a valid value. End of input is
//! reported as `None` so the caller can wind the session down the same way
//! as a normal exit.

use std::io::{self, BufRead, Write};

use biblio_core::BookType;
use chrono::NaiveDate;

/// Textual format for all dates crossing the console boundary
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for session output that is not part of a prompt
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Next input line, trimmed. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "> Enter {label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for a non-empty string
    pub fn prompt_str(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.ask(label)? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            writeln!(self.output, "error: a value is required")?;
        }
    }

    /// Prompt for an unsigned whole number
    pub fn prompt_u32(&mut self, label: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.ask(label)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "error: enter a whole number")?,
            }
        }
    }

    /// Prompt for a `dd.mm.yyyy` date
    pub fn prompt_date(&mut self, label: &str) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(line) = self.ask(label)? else {
                return Ok(None);
            };
            match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "error: dates look like 31.12.2024")?,
            }
        }
    }

    /// Prompt for one of the known book type codes
    pub fn prompt_book_type(&mut self) -> io::Result<Option<BookType>> {
        loop {
            let Some(code) = self.prompt_u32("book type number")? else {
                return Ok(None);
            };
            match u8::try_from(code).ok().and_then(BookType::from_code) {
                Some(kind) => return Ok(Some(kind)),
                None => writeln!(self.output, "error: unknown book type number")?,
            }
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
