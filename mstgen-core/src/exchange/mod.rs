//! JSON exchange format for graph collections.
//!
//! The persisted schema is a `graphs` array whose entries carry an `id`, an
//! array of unique node names, and edges that reference nodes by name:
//!
//! ```json
//! { "graphs": [ { "id": 1, "nodes": ["A", "B"],
//!                 "edges": [ { "from": "A", "to": "B", "weight": 5 } ] } ] }
//! ```
//!
//! Writing synthesizes node names as `N{index}`. Reading maps the node at
//! position `i` to vertex index `i` and appends edges in document order, so a
//! written collection parses back to the same edge sequence.

mod document;

use std::{
    collections::{HashMap, hash_map::Entry},
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    error::ExchangeError,
    graph::{Graph, GraphEntry},
};

pub use self::document::{EdgeDocument, GraphCollectionDocument, GraphDocument};

/// Returns the synthesized exchange name of vertex `index`.
///
/// # Examples
/// ```
/// assert_eq!(mstgen_core::exchange::node_name(7), "N7");
/// ```
#[must_use]
pub fn node_name(index: usize) -> String {
    format!("N{index}")
}

/// Converts graph entries into the exchange document, naming vertices
/// `N0..N{n-1}` and preserving edge order.
#[must_use]
pub fn to_document(entries: &[GraphEntry]) -> GraphCollectionDocument {
    GraphCollectionDocument {
        graphs: entries.iter().map(graph_document).collect(),
    }
}

fn graph_document(entry: &GraphEntry) -> GraphDocument {
    let nodes = (0..entry.graph.vertex_count()).map(node_name).collect();
    let edges = entry
        .graph
        .edges()
        .iter()
        .map(|edge| EdgeDocument {
            from: node_name(edge.source()),
            to: node_name(edge.destination()),
            weight: edge.weight(),
        })
        .collect();
    GraphDocument {
        id: entry.id,
        nodes,
        edges,
    }
}

/// Resolves an exchange document into graph entries.
///
/// # Errors
/// Returns [`ExchangeError::DuplicateNode`] when a graph declares a node name
/// twice and [`ExchangeError::UnknownNode`] when an edge references a name the
/// graph does not declare.
pub fn from_document(document: GraphCollectionDocument) -> Result<Vec<GraphEntry>, ExchangeError> {
    document.graphs.into_iter().map(resolve_graph).collect()
}

fn resolve_graph(document: GraphDocument) -> Result<GraphEntry, ExchangeError> {
    let GraphDocument { id, nodes, edges } = document;

    let mut indices: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
    for (index, name) in nodes.into_iter().enumerate() {
        match indices.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(slot) => {
                return Err(ExchangeError::DuplicateNode {
                    graph_id: id,
                    name: slot.key().clone(),
                });
            }
        }
    }

    let resolve = |edge_index: usize, name: &str| {
        indices
            .get(name)
            .copied()
            .ok_or_else(|| ExchangeError::UnknownNode {
                graph_id: id,
                edge_index,
                name: name.to_owned(),
            })
    };

    let mut graph = Graph::with_capacity(indices.len(), edges.len());
    for (edge_index, edge) in edges.iter().enumerate() {
        let source = resolve(edge_index, &edge.from)?;
        let destination = resolve(edge_index, &edge.to)?;
        graph.add_edge(source, destination, edge.weight);
    }

    Ok(GraphEntry::new(id, graph))
}

/// Serializes `entries` as pretty-printed JSON into `sink` and flushes it.
///
/// # Errors
/// Returns [`ExchangeError::Stream`] when the sink fails and
/// [`ExchangeError::Json`] when serialization itself fails.
pub fn write_collection<W>(sink: W, entries: &[GraphEntry]) -> Result<(), ExchangeError>
where
    W: Write,
{
    let mut writer = BufWriter::new(sink);
    serde_json::to_writer_pretty(&mut writer, &to_document(entries)).map_err(classify)?;
    writer.write_all(b"\n").map_err(stream_error)?;
    writer.flush().map_err(stream_error)?;
    Ok(())
}

/// Writes `entries` to `path`, replacing any existing file.
///
/// The file is written in full before returning; a failure part-way leaves
/// whatever was written in place.
///
/// # Errors
/// Returns [`ExchangeError::Io`] when the file cannot be created or written
/// and [`ExchangeError::Json`] when serialization fails.
pub fn write_collection_file(path: &Path, entries: &[GraphEntry]) -> Result<(), ExchangeError> {
    let file = File::create(path).map_err(|source| ExchangeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_collection(file, entries).map_err(|err| attach_path(err, path))?;
    debug!(path = %path.display(), graphs = entries.len(), "wrote graph collection");
    Ok(())
}

/// Parses a graph collection from `reader`.
///
/// # Errors
/// Returns [`ExchangeError::Stream`] when the reader fails,
/// [`ExchangeError::Json`] for malformed input, and the resolution errors
/// described on [`from_document`].
pub fn read_collection<R>(reader: R) -> Result<Vec<GraphEntry>, ExchangeError>
where
    R: Read,
{
    let document: GraphCollectionDocument =
        serde_json::from_reader(BufReader::new(reader)).map_err(classify)?;
    from_document(document)
}

/// Parses a graph collection from a JSON string.
///
/// # Errors
/// Returns [`ExchangeError::Json`] for malformed input and the resolution
/// errors described on [`from_document`].
///
/// # Examples
/// ```
/// use mstgen_core::exchange::parse_collection;
///
/// let json = r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":5}]}]}"#;
/// let entries = parse_collection(json)?;
/// let edge = entries[0].graph.edges()[0];
/// assert_eq!((edge.source(), edge.destination(), edge.weight()), (0, 1, 5));
/// # Ok::<(), mstgen_core::ExchangeError>(())
/// ```
pub fn parse_collection(json: &str) -> Result<Vec<GraphEntry>, ExchangeError> {
    let document: GraphCollectionDocument = serde_json::from_str(json)?;
    from_document(document)
}

/// Reads and parses the graph collection stored at `path`.
///
/// # Errors
/// Returns [`ExchangeError::Io`] when the file cannot be opened or read,
/// otherwise the errors of [`read_collection`].
pub fn read_collection_file(path: &Path) -> Result<Vec<GraphEntry>, ExchangeError> {
    let file = File::open(path).map_err(|source| ExchangeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = read_collection(file).map_err(|err| attach_path(err, path))?;
    debug!(path = %path.display(), graphs = entries.len(), "read graph collection");
    Ok(entries)
}

/// Separates stream failures surfaced through `serde_json` from document
/// errors.
fn classify(err: serde_json::Error) -> ExchangeError {
    if err.is_io() {
        stream_error(io::Error::from(err))
    } else {
        ExchangeError::Json(err)
    }
}

const fn stream_error(source: io::Error) -> ExchangeError {
    ExchangeError::Stream { source }
}

fn attach_path(err: ExchangeError, path: &Path) -> ExchangeError {
    match err {
        ExchangeError::Stream { source } => ExchangeError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
