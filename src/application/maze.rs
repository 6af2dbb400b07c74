//! The built-in maze searched when no graph file is given.

use crate::domain::{GraphDefinition, NodeId};

/// Entrance of the maze.
pub const MAZE_START: NodeId = 0;

/// Exit of the maze.
pub const MAZE_GOAL: NodeId = 17;

const MAZE_NODES: NodeId = 25;

const MAZE_EDGES: [(NodeId, NodeId); 24] = [
    (1, 0),
    (0, 2),
    (2, 3),
    (2, 4),
    (4, 5),
    (5, 7),
    (5, 6),
    (4, 8),
    (8, 9),
    (8, 10),
    (10, 12),
    (10, 11),
    (11, 13),
    (11, 14),
    (14, 15),
    (14, 16),
    (16, 17),
    (16, 18),
    (18, 19),
    (18, 20),
    (20, 21),
    (20, 22),
    (22, 23),
    (22, 24),
];

/// Undirected maze: nodes `0..25`, each junction a node, each corridor an edge.
pub fn maze_definition() -> GraphDefinition {
    GraphDefinition {
        directed: false,
        nodes: (0..MAZE_NODES).collect(),
        edges: MAZE_EDGES.to_vec(),
    }
}
