//! Weighted undirected graph model shared by the generator and the exchange
//! codec.
//!
//! The model is deliberately plain data: [`Graph::add_edge`] appends without
//! bounds checks, self-loop rejection, or de-duplication. Producers that need
//! stronger guarantees establish them themselves (the generator connects every
//! vertex by construction, the parser resolves every endpoint name).

/// A single weighted edge stored in insertion orientation.
///
/// `(u, v)` and `(v, u)` are distinct records even though the graph is
/// undirected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge between two vertex indices.
    ///
    /// # Examples
    /// ```
    /// use mstgen_core::Edge;
    ///
    /// let edge = Edge::new(0, 2, 17);
    /// assert_eq!((edge.source(), edge.destination(), edge.weight()), (0, 2, 17));
    /// ```
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the endpoint recorded first.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the endpoint recorded second.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// A weighted undirected graph with a fixed vertex count and an append-only
/// edge list.
///
/// # Examples
/// ```
/// use mstgen_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4);
/// graph.add_edge(1, 2, 9);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph over `vertex_count` vertices.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `edge_capacity` edges.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Appends an edge unconditionally.
    pub fn add_edge(&mut self, source: usize, destination: usize, weight: i64) {
        self.edges.push(Edge::new(source, destination, weight));
    }

    /// Returns the number of vertices fixed at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of stored edges, parallel edges included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }
}

/// A graph paired with the identifier it carries in the exchange format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphEntry {
    /// Identifier written to the `id` field; sequential from 1 within a tier.
    pub id: i64,
    /// The graph itself.
    pub graph: Graph,
}

impl GraphEntry {
    /// Pairs `graph` with `id`.
    #[must_use]
    pub const fn new(id: i64, graph: Graph) -> Self {
        Self { id, graph }
    }
}
