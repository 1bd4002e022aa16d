//! Command-line interface for the fixture dataset.
//!
//! `generate` regenerates every tier file from the configured seed; `inspect`
//! runs the full load (regenerate, then read the `test` fixture and every tier)
//! and reports per-category statistics.

mod commands;

pub use commands::{
    CategorySummary, Cli, CliError, Command, DatasetArgs, ExecutionSummary, render_summary,
    run_cli,
};
