//! Size tiers and the category generator.
//!
//! A tier names a fixture category, the file it is persisted to, and how its
//! graphs are shaped. Sampled tiers draw a fresh density per graph from a
//! half-open range; fixed tiers list an explicit `(vertex_count, density)` per
//! graph. Graph ids restart at 1 in every tier.

use rand::Rng;
use tracing::info;

use crate::{
    error::GenerationError,
    generator::{generate_connected_graph, is_valid_density},
    graph::GraphEntry,
};

/// Category key of the externally authored, held-out fixture.
pub const TEST_CATEGORY: &str = "test";
/// Category key of the small tier.
pub const SMALL_CATEGORY: &str = "small";
/// Category key of the medium tier.
pub const MEDIUM_CATEGORY: &str = "medium";
/// Category key of the large tier.
pub const LARGE_CATEGORY: &str = "large";
/// Category key of the extra-large tier.
pub const EXTRA_LARGE_CATEGORY: &str = "extra_large";

const SMALL_GRAPH_COUNT: usize = 5;
const SMALL_VERTEX_COUNT: usize = 30;
const SMALL_DENSITY: DensityRange = DensityRange::from_bounds(0.4, 0.6);

const MEDIUM_GRAPH_COUNT: usize = 10;
const MEDIUM_VERTEX_COUNT: usize = 300;
const MEDIUM_DENSITY: DensityRange = DensityRange::from_bounds(0.2, 0.4);

const LARGE_GRAPH_COUNT: usize = 10;
const LARGE_VERTEX_COUNT: usize = 1_000;
const LARGE_DENSITY: DensityRange = DensityRange::from_bounds(0.1, 0.2);

const EXTRA_LARGE_GRAPHS: [FixedGraph; 3] = [
    FixedGraph::new(1_300, 0.08),
    FixedGraph::new(1_600, 0.06),
    FixedGraph::new(2_000, 0.05),
];

/// A half-open density interval `[min, max)` sampled once per graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityRange {
    min: f64,
    max: f64,
}

impl DensityRange {
    /// Creates a range after checking `0 < min <= max <= 1`.
    ///
    /// A degenerate range with `min == max` always yields `min`.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidDensityRange`] when the bounds are not
    /// finite densities or are inverted.
    ///
    /// # Examples
    /// ```
    /// use mstgen_core::tier::DensityRange;
    ///
    /// assert!(DensityRange::new(0.2, 0.4).is_ok());
    /// assert!(DensityRange::new(0.4, 0.2).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, GenerationError> {
        if !is_valid_density(min) || !is_valid_density(max) || min > max {
            return Err(GenerationError::InvalidDensityRange { min, max });
        }
        Ok(Self::from_bounds(min, max))
    }

    const fn from_bounds(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> f64 { self.min }

    /// Returns the exclusive upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> f64 { self.max }

    /// Draws one density from the shared stream as
    /// `min + U[0, 1) * (max - min)`.
    #[expect(
        clippy::float_arithmetic,
        reason = "interpolating within the density range"
    )]
    pub fn sample<R>(&self, rng: &mut R) -> f64
    where
        R: Rng,
    {
        let unit: f64 = rng.r#gen();
        self.min + unit * (self.max - self.min)
    }
}

/// One explicitly sized graph of a fixed tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedGraph {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Target density of the graph.
    pub density: f64,
}

impl FixedGraph {
    /// Describes a graph of `vertex_count` vertices at `density`.
    #[must_use]
    pub const fn new(vertex_count: usize, density: f64) -> Self {
        Self {
            vertex_count,
            density,
        }
    }
}

/// How the graphs of a tier are sized.
#[derive(Clone, Debug, PartialEq)]
pub enum TierShape {
    /// A fixed number of equally sized graphs with sampled densities.
    Sampled {
        /// Number of graphs in the tier.
        graph_count: usize,
        /// Vertex count shared by every graph.
        vertex_count: usize,
        /// Range each graph's density is drawn from.
        density: DensityRange,
    },
    /// An explicit list of graph sizes and densities.
    Fixed(Vec<FixedGraph>),
}

/// A named fixture category and its generation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TierSpec {
    /// Category key used in the loaded dataset.
    pub category: String,
    /// File name inside the fixtures directory.
    pub file_name: String,
    /// Graph sizing for the tier.
    pub shape: TierShape,
}

impl TierSpec {
    /// Creates a sampled tier.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidDensityRange`] for malformed density
    /// bounds.
    pub fn sampled(
        category: impl Into<String>,
        file_name: impl Into<String>,
        graph_count: usize,
        vertex_count: usize,
        (min_density, max_density): (f64, f64),
    ) -> Result<Self, GenerationError> {
        let density = DensityRange::new(min_density, max_density)?;
        Ok(Self::with_range(
            category,
            file_name,
            graph_count,
            vertex_count,
            density,
        ))
    }

    /// Creates a sampled tier from an already validated density range.
    #[must_use]
    pub fn with_range(
        category: impl Into<String>,
        file_name: impl Into<String>,
        graph_count: usize,
        vertex_count: usize,
        density: DensityRange,
    ) -> Self {
        Self {
            category: category.into(),
            file_name: file_name.into(),
            shape: TierShape::Sampled {
                graph_count,
                vertex_count,
                density,
            },
        }
    }

    /// Creates a fixed tier from explicit graph descriptions.
    #[must_use]
    pub fn fixed(
        category: impl Into<String>,
        file_name: impl Into<String>,
        graphs: Vec<FixedGraph>,
    ) -> Self {
        Self {
            category: category.into(),
            file_name: file_name.into(),
            shape: TierShape::Fixed(graphs),
        }
    }

    /// Returns how many graphs the tier produces.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        match &self.shape {
            TierShape::Sampled { graph_count, .. } => *graph_count,
            TierShape::Fixed(graphs) => graphs.len(),
        }
    }
}

/// Returns the four generated tiers in generation order: small, medium, large
/// and extra-large.
///
/// The order is part of the reproducibility contract because every tier draws
/// from the same seeded stream.
///
/// # Examples
/// ```
/// use mstgen_core::tier::standard_tiers;
///
/// let names: Vec<_> = standard_tiers()
///     .into_iter()
///     .map(|tier| tier.category)
///     .collect();
/// assert_eq!(names, ["small", "medium", "large", "extra_large"]);
/// ```
#[must_use]
pub fn standard_tiers() -> Vec<TierSpec> {
    vec![
        TierSpec::with_range(
            SMALL_CATEGORY,
            "small_graphs.json",
            SMALL_GRAPH_COUNT,
            SMALL_VERTEX_COUNT,
            SMALL_DENSITY,
        ),
        TierSpec::with_range(
            MEDIUM_CATEGORY,
            "medium_graphs.json",
            MEDIUM_GRAPH_COUNT,
            MEDIUM_VERTEX_COUNT,
            MEDIUM_DENSITY,
        ),
        TierSpec::with_range(
            LARGE_CATEGORY,
            "large_graphs.json",
            LARGE_GRAPH_COUNT,
            LARGE_VERTEX_COUNT,
            LARGE_DENSITY,
        ),
        TierSpec::fixed(
            EXTRA_LARGE_CATEGORY,
            "extra_large_graphs.json",
            EXTRA_LARGE_GRAPHS.to_vec(),
        ),
    ]
}

/// Generates every graph of `tier`, numbering them from 1.
///
/// Sampled tiers draw each graph's density immediately before generating that
/// graph, so the stream interleaves density and edge draws.
///
/// # Errors
/// Returns [`GenerationError`] when a graph's parameters are degenerate.
///
/// # Examples
/// ```
/// use mstgen_core::tier::{TierSpec, generate_tier};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let tier = TierSpec::sampled("tiny", "tiny.json", 3, 6, (0.5, 0.7))?;
/// let entries = generate_tier(&tier, &mut SmallRng::seed_from_u64(1))?;
/// let ids: Vec<i64> = entries.iter().map(|entry| entry.id).collect();
/// assert_eq!(ids, [1, 2, 3]);
/// # Ok::<(), mstgen_core::GenerationError>(())
/// ```
pub fn generate_tier<R>(tier: &TierSpec, rng: &mut R) -> Result<Vec<GraphEntry>, GenerationError>
where
    R: Rng,
{
    let mut entries = Vec::with_capacity(tier.graph_count());
    match &tier.shape {
        TierShape::Sampled {
            graph_count,
            vertex_count,
            density,
        } => {
            for id in (1_i64..).take(*graph_count) {
                let sampled = density.sample(rng);
                let graph = generate_connected_graph(*vertex_count, sampled, rng)?;
                entries.push(GraphEntry::new(id, graph));
            }
        }
        TierShape::Fixed(graphs) => {
            for (id, fixed) in (1_i64..).zip(graphs) {
                let graph = generate_connected_graph(fixed.vertex_count, fixed.density, rng)?;
                entries.push(GraphEntry::new(id, graph));
            }
        }
    }

    info!(
        category = %tier.category,
        graphs = entries.len(),
        edges = entries.iter().map(|entry| entry.graph.edge_count()).sum::<usize>(),
        "generated tier"
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::connectivity::is_connected;
    use crate::generator::target_edge_count;

    #[rstest]
    #[case::zero_min(0.0, 0.5)]
    #[case::inverted(0.6, 0.4)]
    #[case::above_one(0.5, 1.2)]
    #[case::nan(f64::NAN, 0.5)]
    fn density_range_rejects_malformed_bounds(#[case] min: f64, #[case] max: f64) {
        let err = DensityRange::new(min, max).expect_err("range must be rejected");
        assert!(matches!(err, GenerationError::InvalidDensityRange { .. }));
    }

    #[test]
    fn density_samples_stay_within_range() {
        let range = DensityRange::new(0.2, 0.4).expect("range is valid");
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..1_000 {
            let density = range.sample(&mut rng);
            assert!((0.2..0.4).contains(&density), "density {density} escaped");
        }
    }

    #[test]
    fn degenerate_range_yields_its_bound() {
        let range = DensityRange::new(0.3, 0.3).expect("range is valid");
        let mut rng = SmallRng::seed_from_u64(9);
        assert!((range.sample(&mut rng) - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn standard_tiers_match_configured_sizes() {
        let tiers = standard_tiers();
        let counts: Vec<usize> = tiers.iter().map(TierSpec::graph_count).collect();
        assert_eq!(counts, [5, 10, 10, 3]);
        let files: Vec<&str> = tiers.iter().map(|tier| tier.file_name.as_str()).collect();
        assert_eq!(
            files,
            [
                "small_graphs.json",
                "medium_graphs.json",
                "large_graphs.json",
                "extra_large_graphs.json"
            ]
        );
    }

    #[test]
    fn sampled_tier_assigns_sequential_ids_and_shared_size() {
        let tier = TierSpec::sampled("unit", "unit.json", 4, 12, (0.3, 0.5)).expect("tier is valid");
        let entries =
            generate_tier(&tier, &mut SmallRng::seed_from_u64(42)).expect("generation succeeds");
        let ids: Vec<i64> = entries.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        for entry in &entries {
            assert_eq!(entry.graph.vertex_count(), 12);
            assert!(is_connected(&entry.graph));
            let min = target_edge_count(12, 0.3).expect("valid");
            let max = target_edge_count(12, 0.5).expect("valid");
            assert!((min..=max).contains(&entry.graph.edge_count()));
        }
    }

    #[test]
    fn fixed_tier_uses_each_listed_size() {
        let tier = TierSpec::fixed(
            "fixed",
            "fixed.json",
            vec![FixedGraph::new(5, 1.0), FixedGraph::new(8, 0.5)],
        );
        let entries =
            generate_tier(&tier, &mut SmallRng::seed_from_u64(42)).expect("generation succeeds");
        let shapes: Vec<(i64, usize, usize)> = entries
            .iter()
            .map(|entry| (entry.id, entry.graph.vertex_count(), entry.graph.edge_count()))
            .collect();
        assert_eq!(shapes, [(1, 5, 10), (2, 8, 14)]);
    }

    #[test]
    fn fixed_tier_surfaces_degenerate_graphs() {
        let tier = TierSpec::fixed("bad", "bad.json", vec![FixedGraph::new(0, 0.5)]);
        let err = generate_tier(&tier, &mut SmallRng::seed_from_u64(0))
            .expect_err("zero vertices must be rejected");
        assert_eq!(err, GenerationError::ZeroVertices);
    }

    #[test]
    fn same_seed_reproduces_a_tier() {
        let tier = TierSpec::sampled("unit", "unit.json", 3, 20, (0.2, 0.6)).expect("tier is valid");
        let first = generate_tier(&tier, &mut SmallRng::seed_from_u64(5)).expect("generation");
        let second = generate_tier(&tier, &mut SmallRng::seed_from_u64(5)).expect("generation");
        assert_eq!(first, second);
    }
}
