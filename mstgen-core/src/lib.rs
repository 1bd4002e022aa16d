//! Mstgen core library.
//!
//! Generates seeded, connected, weighted undirected graphs for minimum spanning
//! tree benchmarks and exchanges them as JSON graph collections.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod connectivity;
pub mod dataset;
mod error;
pub mod exchange;
pub mod generator;
mod graph;
pub mod tier;

pub use crate::{
    dataset::{Dataset, DatasetConfig, DatasetLoader, GenerationReport, TierReport},
    error::{
        DatasetError, DatasetErrorCode, ExchangeError, ExchangeErrorCode, GenerationError,
        GenerationErrorCode,
    },
    graph::{Edge, Graph, GraphEntry},
};
