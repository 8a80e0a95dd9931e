//! Phone Browser CLI
//!
//! Loads phones from a CSV file and opens an interactive query menu.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- phones.csv
//! ```
//!
//! Without an argument the file `MOCK_DATA.csv` in the working directory is
//! used. A missing file is reported and the menu starts with no phones.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use phone_browser::{PhoneStore, Result, Shell};
use std::env;
use std::io::{self, Write};
use std::process;

const DEFAULT_DATA_FILE: &str = "MOCK_DATA.csv";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let input_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut store = PhoneStore::new();
    match store.load_path(&input_path) {
        Ok(report) => {
            for skipped in &report.skipped {
                writeln!(out, "Skipped {}", skipped)?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }

    let stdin = io::stdin();
    Shell::new(&store, stdin.lock(), out).run()
}
