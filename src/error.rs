//! Error types shared by all graph algorithms

use thiserror::Error;

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by the algorithms of this crate.
///
/// Node labels are rendered via `Debug`, which keeps the error type independent of the
/// label type of the graph that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a node that is not a key of the graph
    #[error("Invalid graph: node {node} references missing neighbor {neighbor}")]
    InvalidGraph { node: String, neighbor: String },

    /// Contraction needs a random neighbor of a node that has none left
    #[error("Disconnected operand: node {node} has no neighbors left to contract")]
    DisconnectedOperand { node: String },

    /// A minimum cut needs at least two nodes
    #[error("Degenerate input: minimum cut requires at least 2 nodes, got {nodes}")]
    DegenerateInput { nodes: usize },

    /// Undirected adjacency lists disagree on the multiplicity of an edge
    #[error("Asymmetric edge: {u} lists {v} {forward} time(s), but {v} lists {u} {backward} time(s)")]
    AsymmetricEdge {
        u: String,
        v: String,
        forward: usize,
        backward: usize,
    },

    /// The estimator was asked to run zero trials
    #[error("At least one trial is required")]
    NoTrials,

    /// Exhaustive isomorphism search was refused for a graph above the configured limit
    #[error("Exhaustive search on {nodes} nodes exceeds the limit of {limit}")]
    TooManyNodes { nodes: usize, limit: usize },
}

impl GraphError {
    pub(crate) fn invalid_graph<K: std::fmt::Debug>(node: &K, neighbor: &K) -> Self {
        GraphError::InvalidGraph {
            node: format!("{node:?}"),
            neighbor: format!("{neighbor:?}"),
        }
    }

    pub(crate) fn disconnected_operand<K: std::fmt::Debug>(node: &K) -> Self {
        GraphError::DisconnectedOperand {
            node: format!("{node:?}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_render_labels() {
        let err = GraphError::invalid_graph(&"A", &"Z");
        assert_eq!(
            err.to_string(),
            "Invalid graph: node \"A\" references missing neighbor \"Z\""
        );

        let err = GraphError::disconnected_operand(&7u32);
        assert_eq!(
            err.to_string(),
            "Disconnected operand: node 7 has no neighbors left to contract"
        );

        assert_eq!(
            GraphError::DegenerateInput { nodes: 1 }.to_string(),
            "Degenerate input: minimum cut requires at least 2 nodes, got 1"
        );
    }
}
