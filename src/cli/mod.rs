//! Command Line Interface (CLI) layer for thumbkit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `thumbnail` and `convert`
//! subcommands in single-file and directory modes. It wires user-provided
//! options to the library functionality exposed via `thumbkit::api`.
//!
//! If you are embedding thumbkit into another application, prefer using
//! the high-level `thumbkit::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
