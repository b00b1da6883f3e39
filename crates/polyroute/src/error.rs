//! Error taxonomy for graph construction and queries.
//!
//! All variants describe inconsistent input or caller error; none is transient.

use std::fmt;

use crate::graph::Id;

/// Which id namespace an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdKind {
    Node,
    Edge,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::Node => f.write_str("node"),
            IdKind::Edge => f.write_str("edge"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: IdKind, id: Id },

    #[error("edge {edge} references missing node {node}")]
    DanglingReference { edge: Id, node: Id },

    #[error("{kind} not found: {id}")]
    NotFound { kind: IdKind, id: Id },

    #[error("endpoint mismatch: node {node} is not an endpoint of edge {edge}")]
    InvalidEndpoint { edge: Id, node: Id },

    #[error("no route from edge {from} to edge {to}")]
    NoRoute { from: Id, to: Id },
}

impl GraphError {
    pub(crate) fn node_not_found(id: &Id) -> Self {
        GraphError::NotFound {
            kind: IdKind::Node,
            id: id.clone(),
        }
    }

    pub(crate) fn edge_not_found(id: &Id) -> Self {
        GraphError::NotFound {
            kind: IdKind::Edge,
            id: id.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
