//! Unit and property tests for connected graph generation.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use crate::connectivity::{component_count, is_connected};
use crate::error::GenerationError;

use super::{MAX_WEIGHT, MIN_WEIGHT, generate_connected_graph, target_edge_count};

fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[rstest]
#[case::single_vertex(1, 1.0, 0)]
#[case::pair(2, 0.5, 1)]
#[case::complete(4, 1.0, 6)]
#[case::tree_floor(10, 0.01, 9)]
#[case::half(30, 0.5, 217)]
#[case::fractional(30, 0.45, 195)]
fn target_edge_count_matches_formula(
    #[case] vertex_count: usize,
    #[case] density: f64,
    #[case] expected: usize,
) {
    let target = target_edge_count(vertex_count, density).expect("parameters are valid");
    assert_eq!(target, expected);
}

#[test]
fn complete_density_on_four_vertices_emits_three_tree_edges_then_six_total() {
    let graph = generate_connected_graph(4, 1.0, &mut seeded(42)).expect("generation succeeds");
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 6);
    for (offset, edge) in graph.edges().iter().take(3).enumerate() {
        assert_eq!(edge.destination(), offset + 1);
        assert!(edge.source() < edge.destination());
    }
    assert!(graph.edges().iter().all(|edge| !edge.is_self_loop()));
}

#[test]
fn single_vertex_yields_edgeless_graph() {
    let graph = generate_connected_graph(1, 0.7, &mut seeded(1)).expect("generation succeeds");
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(is_connected(&graph));
}

#[test]
fn same_seed_reproduces_identical_graphs() {
    let first = generate_connected_graph(50, 0.3, &mut seeded(7)).expect("generation succeeds");
    let second = generate_connected_graph(50, 0.3, &mut seeded(7)).expect("generation succeeds");
    assert_eq!(first, second);
}

#[test]
fn shared_stream_advances_between_calls() {
    let mut rng = seeded(7);
    let first = generate_connected_graph(50, 0.3, &mut rng).expect("generation succeeds");
    let second = generate_connected_graph(50, 0.3, &mut rng).expect("generation succeeds");
    assert_ne!(first, second);
}

#[test]
fn densification_never_emits_self_loops() {
    let graph = generate_connected_graph(3, 1.0, &mut seeded(3)).expect("generation succeeds");
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.edges().iter().all(|edge| !edge.is_self_loop()));
}

#[rstest]
#[case::zero_vertices(0, 0.5, GenerationError::ZeroVertices)]
#[case::zero_density(5, 0.0, GenerationError::InvalidDensity { density: 0.0 })]
#[case::negative_density(5, -0.25, GenerationError::InvalidDensity { density: -0.25 })]
#[case::oversized_density(5, 1.5, GenerationError::InvalidDensity { density: 1.5 })]
fn rejects_degenerate_parameters(
    #[case] vertex_count: usize,
    #[case] density: f64,
    #[case] expected: GenerationError,
) {
    let err = generate_connected_graph(vertex_count, density, &mut seeded(0))
        .expect_err("parameters must be rejected");
    assert_eq!(err, expected);
}

#[test]
fn rejects_nan_density() {
    let err = target_edge_count(5, f64::NAN).expect_err("NaN must be rejected");
    assert!(matches!(err, GenerationError::InvalidDensity { density } if density.is_nan()));
}

#[test]
fn rejects_overflowing_vertex_count() {
    let err = target_edge_count(usize::MAX, 0.5).expect_err("pair count must overflow");
    assert_eq!(
        err,
        GenerationError::EdgeCountOverflow {
            vertex_count: usize::MAX
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_graphs_are_connected_with_exact_edge_counts(
        vertex_count in 2_usize..80,
        density in 0.001_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let graph = generate_connected_graph(vertex_count, density, &mut seeded(seed))
            .expect("parameters are valid");
        let expected = target_edge_count(vertex_count, density).expect("parameters are valid");

        prop_assert_eq!(graph.vertex_count(), vertex_count);
        prop_assert_eq!(graph.edge_count(), expected);
        prop_assert_eq!(component_count(&graph), 1);
        for edge in graph.edges() {
            prop_assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&edge.weight()));
            prop_assert!(edge.source() < vertex_count);
            prop_assert!(edge.destination() < vertex_count);
            prop_assert!(!edge.is_self_loop());
        }
    }

    #[test]
    fn leading_edges_form_a_recursive_tree(
        vertex_count in 2_usize..80,
        seed in any::<u64>(),
    ) {
        let graph = generate_connected_graph(vertex_count, 0.05, &mut seeded(seed))
            .expect("parameters are valid");
        for (offset, edge) in graph.edges().iter().take(vertex_count - 1).enumerate() {
            prop_assert_eq!(edge.destination(), offset + 1);
            prop_assert!(edge.source() <= offset);
        }
    }
}
