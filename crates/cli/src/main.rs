// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! biblio - menu-driven library catalog

mod app;
mod console;
mod menu;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use biblio_storage::Store;

use crate::app::App;
use crate::console::Console;

#[derive(Parser)]
#[command(name = "biblio", version, about = "Menu-driven library catalog")]
struct Cli {
    /// Library name shown in the menu banner
    #[arg(long, default_value = "Home")]
    name: String,

    /// Base path for the database file (".json" is appended)
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let base = match cli.data {
        Some(path) => path,
        None => default_data_base()?,
    };
    if let Some(parent) = base.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }
    }

    let (store, catalog) = Store::open(&base)
        .with_context(|| format!("opening library database at {}", base.display()))?;
    info!(
        path = %store.path().display(),
        customers = catalog.customers().count(),
        books = catalog.books().count(),
        loans = catalog.loans().count(),
        "library opened"
    );

    let catalog = Arc::new(Mutex::new(catalog));

    // The menu loop blocks on stdin, so the interrupt handler finishes
    // the save itself instead of flagging the loop.
    let handler_store = store.clone();
    let handler_catalog = Arc::clone(&catalog);
    ctrlc::set_handler(move || {
        let catalog = handler_catalog.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = handler_store.save(&catalog) {
            error!("save on interrupt failed: {e}");
            std::process::exit(1);
        }
        drop(catalog);
        eprintln!("\nInterrupted; library saved.");
        std::process::exit(0);
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    App::new(cli.name, store, catalog, console).run()
}

/// Default snapshot base path when --data is not given
fn default_data_base() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("BIBLIO_DATA_DIR") {
        return Ok(PathBuf::from(dir).join("library"));
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join("biblio/library"));
    }
    let home = std::env::var("HOME").context("HOME is not set; pass --data")?;
    Ok(PathBuf::from(home).join(".local/share/biblio/library"))
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
