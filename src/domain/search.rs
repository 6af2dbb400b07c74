//! Frontier-driven path search
//!
//! Breadth-first and depth-first search share a single engine, [`GraphSearch`],
//! and differ only in the frontier that orders discovered nodes:
//!
//! - [`Queue`] (FIFO) expands nodes level by level -> **BFS**
//! - [`Stack`] (LIFO) follows one branch to its end before backtracking -> **DFS**
//!
//! A node is expanded at most once. While expanding, the engine records how
//! each node was reached; the paths are rebuilt backwards from the goal once
//! it has been expanded.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::{Graph, NodeId};
use crate::domain::path::NodePath;

/// A node waiting in the frontier, together with the node it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery {
    pub node: NodeId,
    pub parent: Option<NodeId>,
    /// Number of edges between the start node and `node` along this discovery
    pub depth: usize,
}

/// Storage for discovered, not yet expanded nodes.
///
/// The frontier decides the expansion order and therefore the kind of search.
pub trait Frontier: Default {
    /// Items leave the frontier in non-decreasing depth order.
    ///
    /// A layered frontier reaches every node first along a shortest path, so
    /// further discoveries at the same depth are alternative shortest paths.
    const LAYERED: bool;

    fn push(&mut self, item: Discovery);

    fn pop(&mut self) -> Option<Discovery>;

    /// Add the discoveries made while expanding one node.
    ///
    /// `items` arrive in adjacency order; the frontier arranges them so
    /// that the first neighbor is expanded first.
    fn push_all(&mut self, items: Vec<Discovery>) {
        for item in items {
            self.push(item);
        }
    }
}

/// FIFO frontier for breadth-first search.
#[derive(Debug, Default)]
pub struct Queue(VecDeque<Discovery>);

impl Frontier for Queue {
    const LAYERED: bool = true;

    fn push(&mut self, item: Discovery) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<Discovery> {
        self.0.pop_front()
    }
}

/// LIFO frontier for depth-first search.
#[derive(Debug, Default)]
pub struct Stack(Vec<Discovery>);

impl Frontier for Stack {
    const LAYERED: bool = false;

    fn push(&mut self, item: Discovery) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<Discovery> {
        self.0.pop()
    }

    // Push in reverse order for left-to-right traversal
    fn push_all(&mut self, items: Vec<Discovery>) {
        for item in items.into_iter().rev() {
            self.push(item);
        }
    }
}

/// Single search run over a borrowed graph.
pub struct GraphSearch<'a, F: Frontier> {
    graph: &'a Graph,
    frontier: F,
    expanded: HashSet<NodeId>,
    /// Depth at which each expanded node was reached
    depths: HashMap<NodeId, usize>,
    /// Nodes each expanded node was reached from, in expansion order.
    ///
    /// A [`Discovery`] names one parent, but a layered search may pop the same
    /// node again from several parents one level up; each of those is kept,
    /// so BFS predecessors form a DAG. Other frontiers keep the first parent only.
    predecessors: HashMap<NodeId, Vec<NodeId>>,
}

impl<'a, F: Frontier> GraphSearch<'a, F> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            frontier: F::default(),
            expanded: HashSet::new(),
            depths: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Find paths from `start` to `goal`.
    ///
    /// Returns an empty list when `goal` is unreachable and `[[start]]` when
    /// both nodes are the same. A layered frontier returns every shortest path,
    /// any other frontier the single path along which `goal` was first reached.
    pub fn find_paths(mut self, start: NodeId, goal: NodeId) -> DomainResult<Vec<NodePath>> {
        for node in [start, goal] {
            if !self.graph.contains(node) {
                return Err(DomainError::InvalidNode(node));
            }
        }

        self.frontier.push(Discovery {
            node: start,
            parent: None,
            depth: 0,
        });

        while let Some(item) = self.frontier.pop() {
            if self.expanded.contains(&item.node) {
                self.record_alternative(item);
                continue;
            }
            self.expand(item);

            if item.node == goal {
                self.collect_goal_alternatives(item);
                break;
            }
        }

        if !self.expanded.contains(&goal) {
            debug!("goal {} unreachable from {}", goal, start);
            return Ok(Vec::new());
        }
        Ok(self.build_paths(goal))
    }

    fn expand(&mut self, item: Discovery) {
        trace!("expand {} (depth {})", item.node, item.depth);
        self.expanded.insert(item.node);
        self.depths.insert(item.node, item.depth);
        self.predecessors
            .insert(item.node, item.parent.into_iter().collect());

        let discoveries: Vec<Discovery> = self
            .graph
            .neighbors(item.node)
            .filter(|n| !self.expanded.contains(n))
            .map(|n| Discovery {
                node: n,
                parent: Some(item.node),
                depth: item.depth + 1,
            })
            .collect();
        self.frontier.push_all(discoveries);
    }

    /// Keep a second route to an already expanded node if it is equally short.
    fn record_alternative(&mut self, item: Discovery) {
        if !F::LAYERED {
            return;
        }
        let (Some(parent), Some(&depth)) = (item.parent, self.depths.get(&item.node)) else {
            return;
        };
        if depth == item.depth {
            if let Some(parents) = self.predecessors.get_mut(&item.node) {
                if !parents.contains(&parent) {
                    parents.push(parent);
                }
            }
        }
    }

    /// All remaining routes to the goal of the same length are already queued.
    fn collect_goal_alternatives(&mut self, goal: Discovery) {
        if !F::LAYERED {
            return;
        }
        while let Some(item) = self.frontier.pop() {
            if item.depth > goal.depth {
                break;
            }
            if item.node == goal.node {
                self.record_alternative(item);
            }
        }
    }

    /// Rebuild paths backwards by following recorded predecessors.
    ///
    /// Partial paths are grown from the goal on an explicit work stack, so
    /// path length is bounded by memory, not by call depth. Paths come out
    /// ordered by the predecessor order of the goal, then of its parents.
    fn build_paths(&self, goal: NodeId) -> Vec<NodePath> {
        let mut paths = Vec::new();
        let mut pending = vec![vec![goal]];

        while let Some(mut reversed) = pending.pop() {
            let Some(&node) = reversed.last() else {
                continue;
            };
            match self.predecessors.get(&node) {
                Some(parents) if !parents.is_empty() => {
                    // Last pushed is extended first, so the first parent leads
                    for (i, &parent) in parents.iter().enumerate().rev() {
                        let mut next = if i == 0 {
                            std::mem::take(&mut reversed)
                        } else {
                            reversed.clone()
                        };
                        next.push(parent);
                        pending.push(next);
                    }
                }
                _ => {
                    reversed.reverse();
                    paths.push(NodePath::from(reversed));
                }
            }
        }
        paths
    }
}

/// Selects the frontier used for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    BreadthFirst,
    DepthFirst,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 2] = [SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst];

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            SearchStrategy::BreadthFirst => "BFS",
            SearchStrategy::DepthFirst => "DFS",
        }
    }

    #[instrument(level = "debug", skip(graph))]
    pub fn find_paths(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> DomainResult<Vec<NodePath>> {
        let paths = match self {
            SearchStrategy::BreadthFirst => GraphSearch::<Queue>::new(graph).find_paths(start, goal),
            SearchStrategy::DepthFirst => GraphSearch::<Stack>::new(graph).find_paths(start, goal),
        }?;
        debug!("{}: {} path(s) found", self.label(), paths.len());
        Ok(paths)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All shortest paths from `start` to `goal`, explored level by level.
pub fn breadth_first_paths(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> DomainResult<Vec<NodePath>> {
    SearchStrategy::BreadthFirst.find_paths(graph, start, goal)
}

/// The path along the first explored branch that reaches `goal`.
pub fn depth_first_paths(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> DomainResult<Vec<NodePath>> {
    SearchStrategy::DepthFirst.find_paths(graph, start, goal)
}
