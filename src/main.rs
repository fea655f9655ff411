// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use typed_read::args::Args;
use typed_read::config::Invocation;
use typed_read::error::AppError;
use typed_read::{engine, presentation};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error[{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let invocation = Invocation::try_from(args)?;
    let outcome = engine::run(&invocation)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    presentation::write_outcome(&mut out, invocation.command, &outcome, invocation.format)
}
