//! CLI entry point for tile rearrangement

use clap::Parser;
use retile::io::cli::{Cli, Outcome, Runner, report};
use retile::io::logging::init_logging;
use std::process::ExitCode;

// Allow print so errors reach the user with their full message
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut runner = Runner::new(cli);
    match runner.run() {
        Ok(outcome) => {
            report(runner.cli(), &outcome);
            if outcome == (Outcome::Checked { valid: false }) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(error) => {
            eprintln!("{error}");
            // 2 for images that cannot be read or written, 1 for bad arguments
            if error.is_io() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
