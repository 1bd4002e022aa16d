//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use mstgen_core::{ExchangeError, GenerationError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation rejected the benchmark parameters.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Encoding or decoding a graph collection failed.
    #[error("graph exchange failed: {0}")]
    Exchange(#[from] ExchangeError),
}
