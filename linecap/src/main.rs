//! Sentinel-terminated line capture.
//!
//! Reads lines from standard input and appends them to `./a.txt` (truncated
//! on startup) until a line equal to `quit` arrives. The exit code reports
//! how the run ended; see [`linecap::exit_codes`].

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use linecap::relay::{self, RelayOutcome, RelayStop};
use linecap::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "linecap",
    version,
    about = "Capture standard input lines into ./a.txt until a `quit` line"
)]
struct Cli {}

fn main() {
    logging::init();
    let _cli = Cli::parse();
    let outcome = match run() {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::IO_ERROR);
        }
    };
    match outcome.stop {
        RelayStop::Sentinel => std::process::exit(exit_codes::OK),
        RelayStop::InputClosed => std::process::exit(exit_codes::INPUT_CLOSED),
    }
}

fn run() -> Result<RelayOutcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    relay::relay_to_path(&mut input, Path::new(relay::OUTPUT_PATH))
}
