//! sentiscan CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to
//! text, file, dataset, or stats handling, and exit with the status code the
//! error class calls for. For programmatic use, prefer the library API
//! (`sentiscan::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("sentiscan error: {err}");
        std::process::exit(err.exit_code());
    }
}
