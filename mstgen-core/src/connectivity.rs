//! Connectivity checks over [`Graph`] edge lists.
//!
//! Generated fixtures are connected by construction, and downstream MST
//! consumers expect a single spanning tree. These helpers let callers verify
//! that property for parsed or hand-authored fixtures using a union-find with
//! union by rank and path compression.

use crate::graph::Graph;

#[derive(Clone, Debug)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

#[expect(
    clippy::indexing_slicing,
    reason = "callers only pass indices below the set size"
)]
impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    fn union(&mut self, left: usize, right: usize) {
        let mut left_root = self.find(left);
        let mut right_root = self.find(right);
        if left_root == right_root {
            return;
        }
        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
    }
}

/// Counts connected components over the graph's vertices.
///
/// Edges whose endpoints fall outside `0..vertex_count` are ignored, since the
/// model does not bound-check insertions. A graph with no vertices has zero
/// components.
///
/// # Examples
/// ```
/// use mstgen_core::{Graph, connectivity::component_count};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 3);
/// graph.add_edge(2, 3, 5);
/// assert_eq!(component_count(&graph), 2);
/// ```
#[must_use]
pub fn component_count(graph: &Graph) -> usize {
    let vertex_count = graph.vertex_count();
    let mut set = DisjointSet::new(vertex_count);
    for edge in graph.edges() {
        if edge.source() < vertex_count && edge.destination() < vertex_count {
            set.union(edge.source(), edge.destination());
        }
    }
    set.components
}

/// Returns `true` when every vertex is reachable from every other vertex.
///
/// Empty graphs are treated as disconnected.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    component_count(graph) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn graph_from(vertex_count: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new(vertex_count);
        for &(source, destination) in edges {
            graph.add_edge(source, destination, 1);
        }
        graph
    }

    #[rstest]
    #[case::empty(0, &[], 0)]
    #[case::isolated(3, &[], 3)]
    #[case::path(4, &[(0, 1), (1, 2), (2, 3)], 1)]
    #[case::two_islands(4, &[(0, 1), (3, 2)], 2)]
    #[case::cycle_and_duplicates(3, &[(0, 1), (1, 2), (2, 0), (0, 1)], 1)]
    #[case::self_loop(2, &[(1, 1)], 2)]
    #[case::out_of_range_ignored(2, &[(0, 5)], 2)]
    fn counts_components(
        #[case] vertex_count: usize,
        #[case] edges: &[(usize, usize)],
        #[case] expected: usize,
    ) {
        assert_eq!(component_count(&graph_from(vertex_count, edges)), expected);
    }

    #[test]
    fn single_vertex_is_connected() {
        assert!(is_connected(&Graph::new(1)));
        assert!(!is_connected(&Graph::new(0)));
    }
}
