//! Seeded graph collections for exchange benchmarks.

use mstgen_core::{
    GraphEntry,
    exchange::write_collection,
    tier::{FixedGraph, TierSpec, generate_tier},
};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::ExchangeBenchParams};

/// Generates `params.graph_count` equally shaped graphs from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Generation`] when the shape is degenerate.
pub fn sample_collection(
    params: &ExchangeBenchParams,
    seed: u64,
) -> Result<Vec<GraphEntry>, BenchSetupError> {
    let shape = FixedGraph::new(params.vertex_count, params.density);
    let tier = TierSpec::fixed("bench", "bench.json", vec![shape; params.graph_count]);
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(generate_tier(&tier, &mut rng)?)
}

/// Encodes `entries` into an in-memory JSON document.
///
/// # Errors
/// Returns [`BenchSetupError::Exchange`] if serialisation fails.
pub fn encode_collection(entries: &[GraphEntry]) -> Result<Vec<u8>, BenchSetupError> {
    let mut buffer = Vec::new();
    write_collection(&mut buffer, entries)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    use mstgen_core::exchange::read_collection;

    #[test]
    fn encoded_sample_parses_back() {
        let params = ExchangeBenchParams {
            graph_count: 3,
            vertex_count: 12,
            density: 0.4,
        };
        let entries = sample_collection(&params, 42).expect("sample generates");
        assert_eq!(entries.len(), 3);
        let bytes = encode_collection(&entries).expect("sample encodes");
        let decoded = read_collection(bytes.as_slice()).expect("sample decodes");
        assert_eq!(decoded, entries);
    }

    #[test]
    fn degenerate_shape_is_a_setup_error() {
        let params = ExchangeBenchParams {
            graph_count: 1,
            vertex_count: 0,
            density: 0.4,
        };
        let err = sample_collection(&params, 42).expect_err("zero vertices must fail");
        assert!(matches!(err, BenchSetupError::Generation(_)));
    }
}
