//! Binary entrypoint for the `mintid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match mintid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
