use std::fmt;

use itertools::Itertools;

use crate::domain::graph::{Graph, NodeId};

/// Ordered sequence of nodes from a start node to a goal node, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<NodeId>);

impl NodePath {
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn start(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Number of edges walked, one less than the number of nodes.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// True when every consecutive pair of nodes is an edge of `graph`.
    pub fn is_walk_in(&self, graph: &Graph) -> bool {
        self.0.iter().all(|&n| graph.contains(n))
            && self
                .0
                .iter()
                .tuple_windows()
                .all(|(&a, &b)| graph.has_edge(a, b))
    }
}

impl From<Vec<NodeId>> for NodePath {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

/// Renders as `[0, 2, 4]`.
impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// Display adapter for a list of paths: `[[0, 2], [0, 3]]`, or `[]` when empty.
pub struct PathList<'a>(pub &'a [NodePath]);

impl fmt::Display for PathList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::GraphDefinition;

    #[test]
    fn given_path_when_displayed_then_uses_list_notation() {
        let path = NodePath::from(vec![0, 2, 4]);
        assert_eq!(path.to_string(), "[0, 2, 4]");
        assert_eq!(PathList(&[path]).to_string(), "[[0, 2, 4]]");
    }

    #[test]
    fn given_no_paths_when_displayed_then_renders_empty_list() {
        assert_eq!(PathList(&[]).to_string(), "[]");
    }

    #[test]
    fn given_several_paths_when_displayed_then_separates_with_comma() {
        let paths = vec![NodePath::from(vec![0, 1, 3]), NodePath::from(vec![0, 2, 3])];
        assert_eq!(PathList(&paths).to_string(), "[[0, 1, 3], [0, 2, 3]]");
    }

    #[test]
    fn given_single_node_path_when_counting_edges_then_zero() {
        let path = NodePath::from(vec![5]);
        assert_eq!(path.edge_count(), 0);
        assert_eq!(path.start(), Some(5));
        assert_eq!(path.goal(), Some(5));
    }

    #[test]
    fn given_graph_when_checking_walk_then_requires_consecutive_edges() {
        let graph = Graph::from_definition(&GraphDefinition {
            directed: false,
            nodes: vec![0, 1, 2],
            edges: vec![(0, 1), (1, 2)],
        })
        .unwrap();

        assert!(NodePath::from(vec![0, 1, 2]).is_walk_in(&graph));
        assert!(NodePath::from(vec![2, 1, 0]).is_walk_in(&graph));
        assert!(!NodePath::from(vec![0, 2]).is_walk_in(&graph));
        assert!(!NodePath::from(vec![9]).is_walk_in(&graph));
    }
}
