//! Domain layer: graph model and path search
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod graph;
pub mod path;
pub mod search;

pub use error::{DomainError, DomainResult};
pub use graph::{Graph, GraphDefinition, NodeId};
pub use path::{NodePath, PathList};
pub use search::{
    breadth_first_paths, depth_first_paths, Discovery, Frontier, GraphSearch, Queue,
    SearchStrategy, Stack,
};
