use std::{error::Error, process::ExitCode};

use clap::Parser;
use tygen::cli::{self, Cli};

fn main() -> ExitCode {
    if let Err(error) = run() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    cli::run(&cli)
}
