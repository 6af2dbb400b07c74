use std::collections::BTreeMap;
use std::fmt;

use generational_arena::{Arena, Index};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Identifier of a graph node.
pub type NodeId = u32;

/// Declarative description of a graph, as read from a TOML graph file.
///
/// ```toml
/// directed = false
/// nodes = [0, 1, 2]
/// edges = [[0, 1], [1, 2]]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Edges only go from the first to the second node when set
    #[serde(default)]
    pub directed: bool,
    /// Declared node identifiers
    pub nodes: Vec<NodeId>,
    /// Edges as `[from, to]` pairs, kept in declaration order
    #[serde(default)]
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Graph node stored in the arena.
#[derive(Debug)]
pub struct GraphNode {
    /// External identifier of this node
    pub id: NodeId,
    /// Arena indices of adjacent nodes, in edge insertion order
    pub neighbors: Vec<Index>,
}

/// Arena-based adjacency graph.
///
/// Nodes live in a generational arena and are looked up by their [`NodeId`].
/// Neighbor lists keep edge insertion order, which both searches use to
/// break ties. Once built, the graph is only read.
#[derive(Debug)]
pub struct Graph {
    directed: bool,
    arena: Arena<GraphNode>,
    index: BTreeMap<NodeId, Index>,
    edge_count: usize,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            arena: Arena::new(),
            index: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Build a graph from its definition, validating every edge.
    #[instrument(level = "debug", skip(definition), fields(nodes = definition.nodes.len(), edges = definition.edges.len()))]
    pub fn from_definition(definition: &GraphDefinition) -> DomainResult<Self> {
        let mut graph = Self::new(definition.directed);
        for &id in &definition.nodes {
            graph.add_node(id);
        }
        for &(from, to) in &definition.edges {
            graph.add_edge(from, to)?;
        }
        debug!(
            "built graph: {} nodes, {} edges, directed={}",
            graph.node_count(),
            graph.edge_count(),
            graph.directed
        );
        Ok(graph)
    }

    /// Declare a node. Declaring an existing node is a no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn add_node(&mut self, id: NodeId) -> Index {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.arena.insert(GraphNode {
            id,
            neighbors: Vec::new(),
        });
        self.index.insert(id, idx);
        idx
    }

    /// Connect two declared nodes. Repeated edges are collapsed.
    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> DomainResult<()> {
        let from_idx = self.index_of(from).ok_or(DomainError::UnknownEndpoint {
            from,
            to,
            missing: from,
        })?;
        let to_idx = self.index_of(to).ok_or(DomainError::UnknownEndpoint {
            from,
            to,
            missing: to,
        })?;

        if self.link(from_idx, to_idx) {
            self.edge_count += 1;
        }
        if !self.directed && from_idx != to_idx {
            self.link(to_idx, from_idx);
        }
        Ok(())
    }

    fn link(&mut self, from: Index, to: Index) -> bool {
        match self.arena.get_mut(from) {
            Some(node) if !node.neighbors.contains(&to) => {
                node.neighbors.push(to);
                true
            }
            _ => false,
        }
    }

    fn index_of(&self, id: NodeId) -> Option<Index> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Adjacent nodes of `id` in edge insertion order; empty for unknown nodes.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of(id)
            .and_then(|idx| self.arena.get(idx))
            .into_iter()
            .flat_map(move |node| {
                node.neighbors
                    .iter()
                    .filter_map(move |&idx| self.arena.get(idx).map(|n| n.id))
            })
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).any(|n| n == to)
    }

    /// Declared node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "directed" } else { "undirected" };
        write!(
            f,
            "{} graph ({} nodes, {} edges)",
            kind,
            self.node_count(),
            self.edge_count()
        )
    }
}
