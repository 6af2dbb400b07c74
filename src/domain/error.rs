//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::graph::NodeId;

/// Domain errors represent violations of graph and search invariants.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid node: {0} is not part of the graph")]
    InvalidNode(NodeId),

    #[error("edge ({from}, {to}) references undeclared node {missing}")]
    UnknownEndpoint {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
