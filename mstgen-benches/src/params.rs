//! Benchmark parameter types.
//!
//! The `Display` impls double as Criterion parameter labels.

use std::fmt;

/// Parameters for a single-graph generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Target edge density.
    pub density: f64,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={:.2}", self.vertex_count, self.density)
    }
}

/// Parameters for a collection exchange benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ExchangeBenchParams {
    /// Number of graphs in the collection.
    pub graph_count: usize,
    /// Vertex count shared by every graph.
    pub vertex_count: usize,
    /// Target edge density shared by every graph.
    pub density: f64,
}

impl fmt::Display for ExchangeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graphs={},n={},d={:.2}",
            self.graph_count, self.vertex_count, self.density
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(GenerationBenchParams { vertex_count: 30, density: 0.5 }, "n=30,d=0.50")]
    #[case(GenerationBenchParams { vertex_count: 2_000, density: 0.05 }, "n=2000,d=0.05")]
    fn generation_labels_are_compact(#[case] params: GenerationBenchParams, #[case] label: &str) {
        assert_eq!(params.to_string(), label);
    }

    #[test]
    fn exchange_label_names_collection_shape() {
        let params = ExchangeBenchParams {
            graph_count: 10,
            vertex_count: 300,
            density: 0.3,
        };
        assert_eq!(params.to_string(), "graphs=10,n=300,d=0.30");
    }
}
