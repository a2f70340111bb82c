//! overwork library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use std::io;
use std::process;
use std::sync::{Arc, Mutex, MutexGuard};

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;
use models::Store;
use storage::DataFile;

/// The store shared between the menu loop and the signal handler thread.
pub type SharedStore = Arc<Mutex<Store>>;

/// Lock the shared store, recovering the data if a panic poisoned the lock.
pub fn lock(store: &SharedStore) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    // Only --help/--version; bails out on stray arguments.
    let _cli = Cli::parse();

    let data = DataFile::from_env();
    let store: SharedStore = Arc::new(Mutex::new(data.startup()?));

    install_signal_handler(Arc::clone(&store), data.clone())?;

    let mut input = io::stdin().lock();
    cli::menu::main_loop(&mut input, &store, &data)?;

    // Input stream closed: one final save before leaving.
    data.shutdown(&lock(&store))
}

/// Persist the current state and exit when the process is interrupted or
/// terminated, so a session's mutations survive an external kill.
fn install_signal_handler(store: SharedStore, data: DataFile) -> AppResult<()> {
    ctrlc::set_handler(move || {
        let snapshot = lock(&store);
        match data.shutdown(&snapshot) {
            Ok(()) => process::exit(0),
            Err(e) => {
                ui::messages::error(format!("Failed to save on exit: {e}"));
                process::exit(1);
            }
        }
    })?;
    Ok(())
}
