//! Typed serde mirror of the exchange schema.

use serde::{Deserialize, Serialize};

/// Root of an exchange file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GraphCollectionDocument {
    /// Graph entries in file order.
    pub graphs: Vec<GraphDocument>,
}

/// One graph entry with name-addressed nodes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GraphDocument {
    /// Identifier of the graph within its file.
    pub id: i64,
    /// Node names; position `i` is vertex index `i`.
    pub nodes: Vec<String>,
    /// Edges referencing nodes by name.
    pub edges: Vec<EdgeDocument>,
}

/// One weighted edge between two named nodes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EdgeDocument {
    /// Name of the first endpoint.
    pub from: String,
    /// Name of the second endpoint.
    pub to: String,
    /// Integer weight; negative values are accepted.
    pub weight: i64,
}
