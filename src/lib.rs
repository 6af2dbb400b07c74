//! mazesearch: breadth-first and depth-first path search through a graph.
//!
//! Layers, innermost first:
//! - [`domain`]: arena-backed graph, paths and the frontier-driven search
//! - [`application`]: the built-in maze and the traversal service
//! - [`infrastructure`]: filesystem boundary and service wiring
//! - [`cli`]: argument parsing, dispatch and exit codes
//!
//! ```
//! use mazesearch::application::{maze_definition, MAZE_GOAL, MAZE_START};
//! use mazesearch::domain::{breadth_first_paths, Graph, PathList};
//!
//! let graph = Graph::from_definition(&maze_definition()).unwrap();
//! let paths = breadth_first_paths(&graph, MAZE_START, MAZE_GOAL).unwrap();
//! assert_eq!(PathList(&paths).to_string(), "[[0, 2, 4, 8, 10, 11, 14, 16, 17]]");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
