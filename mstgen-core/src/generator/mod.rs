//! Random connected graph generation.
//!
//! Graphs are built in two phases whose draw order is fixed, so a seeded
//! stream always reproduces the same fixture:
//!
//! 1. A random recursive tree: every vertex `i >= 1` attaches to a parent
//!    drawn uniformly from `0..i`, which connects all vertices with exactly
//!    `vertex_count - 1` edges.
//! 2. Densification: random endpoint pairs are appended until the graph holds
//!    [`target_edge_count`] edges. Draws with `u == v` are discarded and do not
//!    count. Existing pairs are never checked, so dense graphs routinely carry
//!    parallel edges; MST consumers are expected to tolerate them.

use rand::Rng;
use tracing::debug;

use crate::{error::GenerationError, graph::Graph};

/// Smallest weight assigned to a generated edge.
pub const MIN_WEIGHT: i64 = 1;
/// Largest weight assigned to a generated edge.
pub const MAX_WEIGHT: i64 = 100;

/// Returns the number of edges a generated graph will hold:
/// `max(n - 1, floor(n(n - 1) / 2 * density))`.
///
/// # Errors
/// Returns [`GenerationError::ZeroVertices`] for an empty vertex set,
/// [`GenerationError::InvalidDensity`] when `density` is not finite or lies
/// outside `(0, 1]`, and [`GenerationError::EdgeCountOverflow`] when the pair
/// count does not fit in `usize`.
///
/// # Examples
/// ```
/// use mstgen_core::generator::target_edge_count;
///
/// assert_eq!(target_edge_count(4, 1.0)?, 6);
/// assert_eq!(target_edge_count(10, 0.01)?, 9);
/// # Ok::<(), mstgen_core::GenerationError>(())
/// ```
pub fn target_edge_count(vertex_count: usize, density: f64) -> Result<usize, GenerationError> {
    validate(vertex_count, density)?;
    let tree_edges = vertex_count.saturating_sub(1);
    let max_edges = max_edge_count(vertex_count)?;
    Ok(tree_edges.max(scaled_edge_count(max_edges, density)))
}

/// Generates a connected graph over `vertex_count` vertices whose edge count
/// matches [`target_edge_count`].
///
/// The first `vertex_count - 1` edges always form a spanning tree, and every
/// weight lies in [`MIN_WEIGHT`]`..=`[`MAX_WEIGHT`].
///
/// # Errors
/// Returns [`GenerationError`] for the degenerate parameters listed on
/// [`target_edge_count`].
///
/// # Examples
/// ```
/// use mstgen_core::{connectivity::is_connected, generator::generate_connected_graph};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let graph = generate_connected_graph(12, 0.5, &mut rng)?;
/// assert_eq!(graph.edge_count(), 33);
/// assert!(is_connected(&graph));
/// # Ok::<(), mstgen_core::GenerationError>(())
/// ```
pub fn generate_connected_graph<R>(
    vertex_count: usize,
    density: f64,
    rng: &mut R,
) -> Result<Graph, GenerationError>
where
    R: Rng,
{
    let target = target_edge_count(vertex_count, density)?;
    let mut graph = Graph::with_capacity(vertex_count, target);

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = random_weight(rng);
        graph.add_edge(parent, vertex, weight);
    }

    while graph.edge_count() < target {
        let source = rng.gen_range(0..vertex_count);
        let destination = rng.gen_range(0..vertex_count);
        if source != destination {
            let weight = random_weight(rng);
            graph.add_edge(source, destination, weight);
        }
    }

    debug!(
        vertex_count,
        density,
        edge_count = graph.edge_count(),
        "generated connected graph"
    );
    Ok(graph)
}

fn random_weight<R>(rng: &mut R) -> i64
where
    R: Rng,
{
    rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)
}

fn validate(vertex_count: usize, density: f64) -> Result<(), GenerationError> {
    if vertex_count == 0 {
        return Err(GenerationError::ZeroVertices);
    }
    if !is_valid_density(density) {
        return Err(GenerationError::InvalidDensity { density });
    }
    Ok(())
}

pub(crate) fn is_valid_density(density: f64) -> bool {
    density.is_finite() && density > 0.0 && density <= 1.0
}

#[expect(
    clippy::integer_division,
    reason = "n(n - 1) is always even so halving is exact"
)]
fn max_edge_count(vertex_count: usize) -> Result<usize, GenerationError> {
    vertex_count
        .checked_mul(vertex_count.saturating_sub(1))
        .map(|pairs| pairs / 2)
        .ok_or(GenerationError::EdgeCountOverflow { vertex_count })
}

#[expect(
    clippy::float_arithmetic,
    reason = "density scales the maximum edge count"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "edge counts far below 2^53 are represented exactly"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the product is non-negative and floored before conversion"
)]
fn scaled_edge_count(max_edges: usize, density: f64) -> usize {
    let scaled = (max_edges as f64 * density).floor() as usize;
    scaled.min(max_edges)
}

#[cfg(test)]
mod tests;
