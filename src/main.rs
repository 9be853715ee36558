//! promptdock entry point
//!
//! Minimal: parse arguments, dispatch to the CLI, print errors to
//! stderr, exit non-zero on failure. All logic lives in the cli module.

use promptdock::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
