use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building a graph or querying it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    /// A node name (or index) that is not part of the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Edge weights must be finite and non-negative.
    #[error("invalid weight {weight} on edge {from} - {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },

    /// An adjacency table listed `from -> to` without a matching
    /// `to -> from` of the same weight.
    #[error("edge {from} -> {to} has no matching reverse edge")]
    AsymmetricEdge { from: String, to: String },
}
