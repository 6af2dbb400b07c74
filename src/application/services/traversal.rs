//! Traversal service
//!
//! Loads the graph to search (built-in maze or a TOML graph file) and runs
//! every search strategy between a start and a goal node.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::maze::maze_definition;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Graph, GraphDefinition, NodeId, NodePath, PathList, SearchStrategy};
use crate::infrastructure::traits::FileSystem;

/// Paths found by each strategy for one start/goal pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub start: NodeId,
    pub goal: NodeId,
    pub bfs: Vec<NodePath>,
    pub dfs: Vec<NodePath>,
}

impl TraversalReport {
    pub fn paths(&self, strategy: SearchStrategy) -> &[NodePath] {
        match strategy {
            SearchStrategy::BreadthFirst => &self.bfs,
            SearchStrategy::DepthFirst => &self.dfs,
        }
    }
}

/// Renders one line per strategy: `BFS Paths: [[0, 2, 17]]`.
impl fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = SearchStrategy::ALL
            .iter()
            .map(|s| format!("{} Paths: {}", s.label(), PathList(self.paths(*s))))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Service for searching paths through a graph.
pub struct TraversalService {
    fs: Arc<dyn FileSystem>,
}

impl TraversalService {
    /// Create a new traversal service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Build the graph to search: the built-in maze, or the graph file at `source`.
    #[instrument(level = "debug", skip(self))]
    pub fn load_graph(&self, source: Option<&Path>) -> ApplicationResult<Graph> {
        let definition = match source {
            Some(path) => self.read_definition(path)?,
            None => maze_definition(),
        };
        let graph = Graph::from_definition(&definition)?;
        debug!("load_graph: {}", graph);
        Ok(graph)
    }

    /// Parse a TOML graph definition.
    pub fn read_definition(&self, path: &Path) -> ApplicationResult<GraphDefinition> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::GraphFileNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read graph file", path)?;
        toml::from_str(&content).map_err(|e| ApplicationError::GraphFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Search `graph` from `start` to `goal` with every strategy.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn run(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> ApplicationResult<TraversalReport> {
        let bfs = SearchStrategy::BreadthFirst.find_paths(graph, start, goal)?;
        let dfs = SearchStrategy::DepthFirst.find_paths(graph, start, goal)?;
        Ok(TraversalReport {
            start,
            goal,
            bfs,
            dfs,
        })
    }
}
