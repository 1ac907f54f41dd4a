// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One interactive menu session over one catalog
//!
//! The app owns the prompting console and a handle to the shared catalog.
//! Each action locks the catalog briefly, clones what it needs for display,
//! and releases the lock before printing. Domain errors are printed and the
//! session continues; only I/O failures end it early. State is saved exactly
//! once on the way out (the interrupt handler covers the Ctrl-C path).

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use tracing::info;

use biblio_core::{
    Book, BookId, BookType, Catalog, Customer, CustomerId, Loan, SystemClock,
};
use biblio_storage::Store;

use crate::console::{Console, DATE_FORMAT};
use crate::menu::Action;

/// A loan plus the display names its ids resolve to
struct LoanView {
    loan: Loan,
    book_name: String,
    customer_name: String,
}

impl LoanView {
    /// Cascade rules guarantee the book and customer exist while the loan
    /// does, so missing names only appear on a corrupted snapshot.
    fn resolve(catalog: &Catalog, loan: &Loan) -> Self {
        Self {
            loan: loan.clone(),
            book_name: catalog
                .book_by_id(loan.book_id)
                .map(|b| b.name.clone())
                .unwrap_or_default(),
            customer_name: catalog
                .customer_by_id(loan.customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        }
    }
}

pub struct App<R, W> {
    name: String,
    store: Store,
    catalog: Arc<Mutex<Catalog>>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        name: impl Into<String>,
        store: Store,
        catalog: Arc<Mutex<Catalog>>,
        console: Console<R, W>,
    ) -> Self {
        Self {
            name: name.into(),
            store,
            catalog,
            console,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run the menu loop until Exit or end of input, then save
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(action) = self.read_action()? else {
                break;
            };
            if action == Action::Exit {
                break;
            }
            writeln!(self.console.out(), "\n--- {} ---", action.label())?;
            self.dispatch(action)?;
        }

        let catalog = self.lock();
        self.store.save(&catalog)?;
        drop(catalog);
        info!("catalog saved on exit");
        writeln!(self.console.out(), "Library saved.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(
            self.console.out(),
            "\n========== [ {} Library ] ==========",
            self.name
        )?;
        for action in Action::ALL {
            writeln!(self.console.out(), " {:>2}. {}", action.code(), action.label())?;
        }
        Ok(())
    }

    fn read_action(&mut self) -> io::Result<Option<Action>> {
        loop {
            let Some(code) = self.console.prompt_u32("action number")? else {
                return Ok(None);
            };
            match u8::try_from(code).ok().and_then(Action::from_code) {
                Some(action) => return Ok(Some(action)),
                None => writeln!(self.console.out(), "error: unknown action number")?,
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::AddCustomer => self.add_customer(),
            Action::FindCustomerByName => self.find_customer_by_name(),
            Action::DisplayCustomerLoans => self.display_customer_loans(),
            Action::DeleteCustomer => self.delete_customer(),
            Action::AddBook => self.add_book(),
            Action::FindBooksByName => self.find_books_by_name(),
            Action::FindBooksByAuthor => self.find_books_by_author(),
            Action::LoanBook => self.loan_book(),
            Action::ReturnBook => self.return_book(),
            Action::DeleteBook => self.delete_book(),
            Action::DisplayAllCustomers => self.display_all_customers(),
            Action::DisplayAllBooks => self.display_all_books(),
            Action::DisplayAllLoans => self.display_all_loans(),
            Action::DisplayAllLateLoans => self.display_all_late_loans(),
            // Exit never reaches dispatch; run handles it
            Action::Exit => Ok(()),
        }
    }

    // ---- customer actions ----

    fn add_customer(&mut self) -> Result<()> {
        let Some(id) = self.console.prompt_u32("customer id")? else {
            return Ok(());
        };
        let Some(name) = self.console.prompt_str("customer name")? else {
            return Ok(());
        };
        let Some(address) = self.console.prompt_str("address")? else {
            return Ok(());
        };
        let Some(email) = self.console.prompt_str("email")? else {
            return Ok(());
        };
        let Some(birth_date) = self.console.prompt_date("birth date")? else {
            return Ok(());
        };

        let customer = Customer::new(CustomerId(id), name.clone(), address, email, birth_date);
        let result = self.lock().add_customer(customer);
        match result {
            Ok(()) => writeln!(self.console.out(), "Customer {id} ({name}) added.")?,
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn find_customer_by_name(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt_str("customer name")? else {
            return Ok(());
        };
        let found = self.lock().customer_by_name(&name).map(|c| c.clone());
        match found {
            Ok(customer) => self.show_customer(&customer)?,
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn display_customer_loans(&mut self) -> Result<()> {
        let Some(id) = self.console.prompt_u32("customer id")? else {
            return Ok(());
        };
        let views = {
            let catalog = self.lock();
            catalog.customer_loans(CustomerId(id)).map(|loans| {
                loans
                    .into_iter()
                    .map(|loan| LoanView::resolve(&catalog, loan))
                    .collect::<Vec<_>>()
            })
        };
        match views {
            Ok(views) if views.is_empty() => {
                writeln!(self.console.out(), "Customer {id} has no loans.")?;
            }
            Ok(views) => {
                writeln!(self.console.out(), "Customer {id} has {} loan(s):", views.len())?;
                for view in &views {
                    self.show_loan(view)?;
                }
            }
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn delete_customer(&mut self) -> Result<()> {
        let Some(id) = self.console.prompt_u32("customer id")? else {
            return Ok(());
        };
        let removed = self.lock().remove_customer(CustomerId(id));
        match removed {
            Ok(customer) => {
                writeln!(self.console.out(), "Customer {id} ({}) removed.", customer.name)?;
            }
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn display_all_customers(&mut self) -> Result<()> {
        let customers: Vec<Customer> = self.lock().customers().cloned().collect();
        if customers.is_empty() {
            writeln!(self.console.out(), "No customers.")?;
            return Ok(());
        }
        writeln!(self.console.out(), "{} customer(s):", customers.len())?;
        for customer in &customers {
            self.show_customer(customer)?;
        }
        Ok(())
    }

    // ---- book actions ----

    fn add_book(&mut self) -> Result<()> {
        let Some(id) = self.console.prompt_u32("book id")? else {
            return Ok(());
        };
        writeln!(self.console.out(), "Available book types:")?;
        for kind in BookType::ALL {
            writeln!(self.console.out(), "  {}", kind.description())?;
        }
        let Some(kind) = self.console.prompt_book_type()? else {
            return Ok(());
        };
        let Some(name) = self.console.prompt_str("book name")? else {
            return Ok(());
        };
        let Some(author) = self.console.prompt_str("author")? else {
            return Ok(());
        };
        let Some(published) = self.console.prompt_date("publish date")? else {
            return Ok(());
        };

        let book = Book::new(BookId(id), kind, name.clone(), author, published);
        let result = self.lock().add_book(book);
        match result {
            Ok(()) => writeln!(self.console.out(), "Book {id} (\"{name}\") added.")?,
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn find_books_by_name(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt_str("book name")? else {
            return Ok(());
        };
        let found: Vec<(Book, bool)> = {
            let catalog = self.lock();
            catalog
                .books_by_name(&name)
                .into_iter()
                .map(|b| (b.clone(), catalog.is_book_loaned(b.id)))
                .collect()
        };
        if found.is_empty() {
            writeln!(self.console.out(), "No books named \"{name}\".")?;
            return Ok(());
        }
        writeln!(self.console.out(), "Found {} book(s):", found.len())?;
        for (book, on_loan) in &found {
            self.show_book(book, *on_loan)?;
        }
        Ok(())
    }

    fn find_books_by_author(&mut self) -> Result<()> {
        let Some(author) = self.console.prompt_str("author")? else {
            return Ok(());
        };
        let found: Vec<(Book, bool)> = {
            let catalog = self.lock();
            catalog
                .books_by_author(&author)
                .into_iter()
                .map(|b| (b.clone(), catalog.is_book_loaned(b.id)))
                .collect()
        };
        if found.is_empty() {
            writeln!(self.console.out(), "No books by {author}.")?;
            return Ok(());
        }
        writeln!(self.console.out(), "Found {} book(s):", found.len())?;
        for (book, on_loan) in &found {
            self.show_book(book, *on_loan)?;
        }
        Ok(())
    }

    fn delete_book(&mut self) -> Result<()> {
        let Some(id) = self.console.prompt_u32("book id")? else {
            return Ok(());
        };
        let removed = self.lock().remove_book(BookId(id));
        match removed {
            Ok(book) => {
                writeln!(self.console.out(), "Book {id} (\"{}\") removed.", book.name)?;
            }
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn display_all_books(&mut self) -> Result<()> {
        let books: Vec<(Book, bool)> = {
            let catalog = self.lock();
            catalog
                .books()
                .map(|b| (b.clone(), catalog.is_book_loaned(b.id)))
                .collect()
        };
        if books.is_empty() {
            writeln!(self.console.out(), "No books.")?;
            return Ok(());
        }
        writeln!(self.console.out(), "{} book(s):", books.len())?;
        for (book, on_loan) in &books {
            self.show_book(book, *on_loan)?;
        }
        Ok(())
    }

    // ---- loan actions ----

    fn loan_book(&mut self) -> Result<()> {
        let Some(book_id) = self.console.prompt_u32("book id")? else {
            return Ok(());
        };
        let book = {
            let catalog = self.lock();
            catalog
                .book_by_id(BookId(book_id))
                .map(|b| (b.clone(), catalog.is_book_loaned(b.id)))
        };
        let (book, on_loan) = match book {
            Ok(found) => found,
            Err(e) => {
                writeln!(self.console.out(), "error: {e}")?;
                return Ok(());
            }
        };
        self.show_book(&book, on_loan)?;

        let Some(customer_id) = self.console.prompt_u32("customer id")? else {
            return Ok(());
        };
        let customer = self.lock().customer_by_id(CustomerId(customer_id)).map(|c| c.clone());
        let customer = match customer {
            Ok(found) => found,
            Err(e) => {
                writeln!(self.console.out(), "error: {e}")?;
                return Ok(());
            }
        };
        self.show_customer(&customer)?;

        let Some(loan_date) = self.console.prompt_date("loan date")? else {
            return Ok(());
        };
        let Some(return_date) = self.console.prompt_date("return date")? else {
            return Ok(());
        };

        let result = self
            .lock()
            .loan_book(CustomerId(customer_id), BookId(book_id), loan_date, return_date)
            .map(|_| ());
        match result {
            Ok(()) => writeln!(
                self.console.out(),
                "Book {book_id} loaned to customer {customer_id} until {}.",
                return_date.format(DATE_FORMAT)
            )?,
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn return_book(&mut self) -> Result<()> {
        let Some(id) = self.console.prompt_u32("book id")? else {
            return Ok(());
        };
        let returned = self.lock().return_book(BookId(id));
        match returned {
            Ok(loan) => writeln!(
                self.console.out(),
                "Book {id} returned (was due {}).",
                loan.return_date.format(DATE_FORMAT)
            )?,
            Err(e) => writeln!(self.console.out(), "error: {e}")?,
        }
        Ok(())
    }

    fn display_all_loans(&mut self) -> Result<()> {
        let views: Vec<LoanView> = {
            let catalog = self.lock();
            catalog
                .loans()
                .map(|loan| LoanView::resolve(&catalog, loan))
                .collect()
        };
        if views.is_empty() {
            writeln!(self.console.out(), "No loans.")?;
            return Ok(());
        }
        writeln!(self.console.out(), "{} loan(s):", views.len())?;
        for view in &views {
            self.show_loan(view)?;
        }
        Ok(())
    }

    fn display_all_late_loans(&mut self) -> Result<()> {
        let views: Vec<LoanView> = {
            let catalog = self.lock();
            catalog
                .late_loans(&SystemClock)
                .into_iter()
                .map(|loan| LoanView::resolve(&catalog, loan))
                .collect()
        };
        if views.is_empty() {
            writeln!(self.console.out(), "No late loans.")?;
            return Ok(());
        }
        writeln!(self.console.out(), "{} late loan(s):", views.len())?;
        for view in &views {
            self.show_loan(view)?;
        }
        Ok(())
    }

    // ---- display blocks ----

    fn show_customer(&mut self, customer: &Customer) -> io::Result<()> {
        let out = self.console.out();
        writeln!(out, "- Customer {}: {}", customer.id, customer.name)?;
        writeln!(out, "    address: {}", customer.address)?;
        writeln!(out, "    email: {}", customer.email)?;
        writeln!(out, "    born: {}", customer.birth_date.format(DATE_FORMAT))?;
        Ok(())
    }

    fn show_book(&mut self, book: &Book, on_loan: bool) -> io::Result<()> {
        let out = self.console.out();
        writeln!(out, "- Book {}: \"{}\" by {}", book.id, book.name, book.author)?;
        writeln!(
            out,
            "    type: {} (max loan {} day(s))",
            book.kind,
            book.max_loan_duration().num_days()
        )?;
        writeln!(out, "    published: {}", book.date_published.format(DATE_FORMAT))?;
        writeln!(out, "    on loan: {}", if on_loan { "yes" } else { "no" })?;
        Ok(())
    }

    fn show_loan(&mut self, view: &LoanView) -> io::Result<()> {
        let out = self.console.out();
        writeln!(out, "- Loan: book {} \"{}\"", view.loan.book_id, view.book_name)?;
        writeln!(
            out,
            "    borrower: {} (customer {})",
            view.customer_name, view.loan.customer_id
        )?;
        writeln!(out, "    loaned: {}", view.loan.loan_date.format(DATE_FORMAT))?;
        writeln!(out, "    due back: {}", view.loan.return_date.format(DATE_FORMAT))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
