//! Error types for the spanwood core library.
//!
//! Defines error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint fell outside `[0, node_count)`.
    #[error("edge {edge_index} references node {node}, but node_count is {node_count}")]
    NodeOutOfRange {
        /// Position of the offending edge in the input sequence.
        edge_index: usize,
        /// The out-of-range endpoint.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint fell outside the node range.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The requested node is not part of the universe.
    #[error("node {node} is outside a disjoint set of {len} nodes")]
    NodeOutOfRange {
        /// The requested node.
        node: usize,
        /// Size of the universe.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The requested node is not part of the universe.
        NodeOutOfRange => NodeOutOfRange { .. } => "DISJOINT_SET_NODE_OUT_OF_RANGE",
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The input edges violate the graph invariants.
    #[error(transparent)]
    InvalidGraph(#[from] GraphError),
    /// The total weight no longer fits the weight type.
    #[error("total weight overflowed while accepting edge ({u}, {v})")]
    WeightOverflow {
        /// First endpoint of the edge that left the total out of range.
        u: usize,
        /// Second endpoint of the edge that left the total out of range.
        v: usize,
    },
    /// The disjoint set rejected a node that passed graph validation.
    #[error("disjoint set invariant violated: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The input edges violate the graph invariants.
        InvalidGraph => InvalidGraph(_) => "MST_INVALID_GRAPH",
        /// The total weight no longer fits the weight type.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
        /// The disjoint set rejected a validated node.
        DisjointSet => DisjointSet(_) => "MST_DISJOINT_SET",
    }
}

impl MstError {
    /// Returns the nested [`GraphErrorCode`] when the input graph was invalid.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::InvalidGraph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient result alias for MST computations.
pub type Result<T, E = MstError> = std::result::Result<T, E>;
