//! Roshambo Binary
//!
//! Plays Rock-Paper-Scissors against a random computer opponent.
//!
//! Options: --name, --rounds, --seed, --watch, -v

use clap::Parser;
use roshambo::*;

fn main() {
    let args = cli::Args::parse();
    if let Err(e) = log(args.level()) {
        eprintln!("logging unavailable: {}", e);
    }
    if let Err(e) = args.run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
