//! Command Line Interface (CLI) layer for sentiscan.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the text, file, dataset, and
//! stats flows. It wires user-provided options to the underlying library
//! functionality exposed via `sentiscan::api`.
//!
//! If you are embedding sentiscan into another application, prefer using
//! the high-level `sentiscan::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use errors::AppError;
pub use runner::run;
