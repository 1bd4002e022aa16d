//! Error types for the mstgen core library.
//!
//! Each concern (generation, exchange, dataset orchestration) exposes its own
//! enum together with a stable machine-readable code so callers can log and
//! match failures without parsing display strings.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised when generation parameters are degenerate.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerationError {
    /// A graph was requested with no vertices.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// Density was non-finite or outside `(0, 1]`.
    #[error("density must be finite and within (0, 1] (got {density})")]
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
    /// A density range had non-positive, oversized, or inverted bounds.
    #[error("density range [{min}, {max}) must satisfy 0 < min <= max <= 1")]
    InvalidDensityRange {
        /// Lower bound supplied by the caller.
        min: f64,
        /// Upper bound supplied by the caller.
        max: f64,
    },
    /// `vertex_count * (vertex_count - 1)` does not fit in `usize`.
    #[error("maximum edge count for {vertex_count} vertices overflows usize")]
    EdgeCountOverflow {
        /// The vertex count whose pair count overflowed.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// A graph was requested with no vertices.
        ZeroVertices => ZeroVertices => "GENERATION_ZERO_VERTICES",
        /// Density was non-finite or outside `(0, 1]`.
        InvalidDensity => InvalidDensity { .. } => "GENERATION_INVALID_DENSITY",
        /// A density range was malformed.
        InvalidDensityRange => InvalidDensityRange { .. } => "GENERATION_INVALID_DENSITY_RANGE",
        /// The maximum edge count overflowed.
        EdgeCountOverflow => EdgeCountOverflow { .. } => "GENERATION_EDGE_COUNT_OVERFLOW",
    }
}

/// Errors raised while reading or writing the JSON exchange format.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Opening, creating, reading, or writing a fixture file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from or writing to an unnamed stream failed.
    #[error("graph stream I/O failed: {source}")]
    Stream {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The document was not valid JSON or did not match the exchange schema.
    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
    /// An edge referenced a node name that the graph does not declare.
    #[error("graph {graph_id}: edge {edge_index} references unknown node `{name}`")]
    UnknownNode {
        /// Identifier of the offending graph entry.
        graph_id: i64,
        /// Position of the edge within the entry's `edges` array.
        edge_index: usize,
        /// The unresolved node name.
        name: String,
    },
    /// A node name appeared more than once in a graph's `nodes` array.
    #[error("graph {graph_id}: node `{name}` is declared more than once")]
    DuplicateNode {
        /// Identifier of the offending graph entry.
        graph_id: i64,
        /// The repeated node name.
        name: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`ExchangeError`] variants.
    enum ExchangeErrorCode for ExchangeError {
        /// Opening or creating a fixture file failed.
        Io => Io { .. } => "EXCHANGE_IO",
        /// Reading from or writing to a stream failed.
        Stream => Stream { .. } => "EXCHANGE_STREAM_IO",
        /// The document was malformed.
        Json => Json { .. } => "EXCHANGE_MALFORMED_JSON",
        /// An edge referenced an unknown node.
        UnknownNode => UnknownNode { .. } => "EXCHANGE_UNKNOWN_NODE",
        /// A node name was declared twice.
        DuplicateNode => DuplicateNode { .. } => "EXCHANGE_DUPLICATE_NODE",
    }
}

/// Errors raised while preparing or loading the fixture dataset.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A fixture or results directory could not be created.
    #[error("failed to create directory `{path}`: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Two categories were configured with the same key.
    #[error("category `{category}` is configured more than once")]
    DuplicateCategory {
        /// The repeated category key.
        category: String,
    },
    /// Two categories were configured to share one fixture file.
    #[error("fixture file `{file_name}` is assigned to more than one category")]
    DuplicateFile {
        /// The shared file name.
        file_name: String,
    },
    /// Tier generation parameters were rejected.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Writing or reading one category file failed.
    #[error("category `{category}` failed at `{path}`: {source}")]
    Category {
        /// Category whose file failed.
        category: String,
        /// File backing the category.
        path: PathBuf,
        /// Exchange failure raised for the file.
        #[source]
        source: ExchangeError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DatasetError`] variants.
    enum DatasetErrorCode for DatasetError {
        /// A directory could not be created.
        CreateDirectory => CreateDirectory { .. } => "DATASET_CREATE_DIRECTORY",
        /// A category key was configured twice.
        DuplicateCategory => DuplicateCategory { .. } => "DATASET_DUPLICATE_CATEGORY",
        /// A fixture file was assigned to two categories.
        DuplicateFile => DuplicateFile { .. } => "DATASET_DUPLICATE_FILE",
        /// Generation parameters were rejected.
        Generation => Generation { .. } => "DATASET_GENERATION",
        /// A category file failed.
        Category => Category { .. } => "DATASET_CATEGORY",
    }
}

impl DatasetError {
    /// Returns the nested exchange error code when the failure came from a
    /// category file.
    #[must_use]
    pub const fn exchange_code(&self) -> Option<ExchangeErrorCode> {
        match self {
            Self::Category { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
