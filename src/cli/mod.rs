//! Command Line Interface (CLI) layer for COLLAGER.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-folder and batch
//! composition flows. It wires user-provided options to the underlying
//! library functionality exposed via `collager::api`.
//!
//! If you are embedding COLLAGER into another application, prefer using
//! the high-level `collager::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
