//! Benchmark support crate for mstgen.
//!
//! Provides parameter types and seeded graph collections used by the Criterion
//! benchmarks for graph generation and JSON exchange.

pub mod error;
pub mod fixture;
pub mod params;
