use clap::Parser;
use filetidy::cli::{Cli, run_cli};
use filetidy::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Per-file failures are reported during the run and do not change the exit status.
    match run_cli(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::fatal(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
