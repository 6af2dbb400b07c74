//! Tests for TraversalService

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use mazesearch::application::services::TraversalService;
use mazesearch::application::ApplicationError;
use mazesearch::config::Settings;
use mazesearch::domain::{DomainError, NodePath, SearchStrategy};
use mazesearch::infrastructure::di::ServiceContainer;
use mazesearch::infrastructure::traits::{FileSystem, RealFileSystem};
use mazesearch::util::testing;

/// In-memory filesystem holding a fixed set of files
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    fn with_file(path: &str, content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(PathBuf::from(path), content.to_string());
        Self { files }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// Filesystem that reports files it cannot read
struct UnreadableFileSystem;

impl FileSystem for UnreadableFileSystem {
    fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    fn exists(&self, _path: &Path) -> bool {
        true
    }
}

fn real_service() -> TraversalService {
    testing::init_test_setup();
    TraversalService::new(Arc::new(RealFileSystem))
}

// ============================================================
// Built-in maze
// ============================================================

#[test]
fn given_no_graph_file_when_running_then_prints_maze_report() {
    // Arrange
    let service = real_service();
    let graph = service.load_graph(None).unwrap();

    // Act
    let report = service.run(&graph, 0, 17).unwrap();

    // Assert
    assert_eq!(
        report.to_string(),
        "BFS Paths: [[0, 2, 4, 8, 10, 11, 14, 16, 17]]\n\
         DFS Paths: [[0, 2, 4, 8, 10, 11, 14, 16, 17]]"
    );
}

#[test]
fn given_invalid_start_when_running_then_errors_with_invalid_node() {
    let service = real_service();
    let graph = service.load_graph(None).unwrap();

    let result = service.run(&graph, 30, 17);

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidNode(30)))
    ));
}

// ============================================================
// Graph files
// ============================================================

#[test]
fn given_diamond_graph_file_when_running_then_bfs_lists_both_shortest_paths() {
    // Arrange
    let service = real_service();
    let graph = service
        .load_graph(Some(Path::new("tests/resources/graphs/diamond.toml")))
        .unwrap();

    // Act
    let report = service.run(&graph, 0, 3).unwrap();

    // Assert
    assert_eq!(
        report.paths(SearchStrategy::BreadthFirst),
        &[NodePath::from(vec![0, 1, 3]), NodePath::from(vec![0, 2, 3])]
    );
    assert_eq!(
        report.to_string(),
        "BFS Paths: [[0, 1, 3], [0, 2, 3]]\nDFS Paths: [[0, 1, 3]]"
    );
}

#[test]
fn given_isolated_goal_when_running_then_reports_empty_lists() {
    let service = real_service();
    let graph = service
        .load_graph(Some(Path::new("tests/resources/graphs/diamond.toml")))
        .unwrap();

    let report = service.run(&graph, 0, 4).unwrap();

    assert!(report.bfs.is_empty());
    assert!(report.dfs.is_empty());
    assert_eq!(report.to_string(), "BFS Paths: []\nDFS Paths: []");
}

#[test]
fn given_directed_graph_file_when_running_against_direction_then_empty() {
    let service = real_service();
    let graph = service
        .load_graph(Some(Path::new("tests/resources/graphs/one_way.toml")))
        .unwrap();

    assert_eq!(service.run(&graph, 0, 2).unwrap().dfs.len(), 1);
    assert!(service.run(&graph, 2, 0).unwrap().bfs.is_empty());
}

#[test]
fn given_edge_to_undeclared_node_when_loading_then_errors() {
    let service = real_service();

    let result = service.load_graph(Some(Path::new("tests/resources/graphs/dangling_edge.toml")));

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::UnknownEndpoint {
            missing: 5,
            ..
        }))
    ));
}

#[test]
fn given_missing_graph_file_when_loading_then_errors_with_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");

    let result = real_service().load_graph(Some(&missing));

    assert!(matches!(result, Err(ApplicationError::GraphFileNotFound(p)) if p == missing));
}

#[test]
fn given_malformed_toml_when_loading_then_errors_with_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "nodes = [0, 1\nedges = ").unwrap();

    let result = real_service().load_graph(Some(&path));

    assert!(matches!(result, Err(ApplicationError::GraphFormat { .. })));
}

#[test]
fn given_graph_file_without_nodes_when_loading_then_errors_with_format() {
    let fs = Arc::new(MockFileSystem::with_file("/maze.toml", "edges = [[0, 1]]\n"));
    let service = TraversalService::new(fs);

    let result = service.load_graph(Some(Path::new("/maze.toml")));

    assert!(matches!(result, Err(ApplicationError::GraphFormat { .. })));
}

#[test]
fn given_mock_filesystem_when_loading_then_reads_through_boundary() {
    // Arrange
    let fs = Arc::new(MockFileSystem::with_file(
        "/graphs/line.toml",
        "nodes = [7, 8, 9]\nedges = [[7, 8], [8, 9]]\n",
    ));
    let service = TraversalService::new(fs);

    // Act
    let graph = service
        .load_graph(Some(Path::new("/graphs/line.toml")))
        .unwrap();
    let report = service.run(&graph, 9, 7).unwrap();

    // Assert
    assert_eq!(report.bfs, vec![NodePath::from(vec![9, 8, 7])]);
    assert_eq!(report.bfs, report.dfs);
}

#[test]
fn given_unreadable_file_when_loading_then_errors_with_context() {
    let service = TraversalService::new(Arc::new(UnreadableFileSystem));

    let err = service
        .load_graph(Some(Path::new("/locked.toml")))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert_eq!(err.to_string(), "operation failed: read graph file: /locked.toml");
}

#[test]
fn given_container_with_mock_filesystem_when_running_then_traversal_uses_it() {
    // Arrange
    let fs = Arc::new(MockFileSystem::with_file(
        "/graphs/fork.toml",
        "nodes = [1, 2, 3]\nedges = [[1, 2], [1, 3]]\n",
    ));
    let settings = Settings {
        start: 2,
        goal: 3,
        graph: Some(PathBuf::from("/graphs/fork.toml")),
    };
    let container = ServiceContainer::with_deps(settings, fs);

    // Act
    let graph = container
        .traversal
        .load_graph(container.settings.graph.as_deref())
        .unwrap();
    let report = container
        .traversal
        .run(&graph, container.settings.start, container.settings.goal)
        .unwrap();

    // Assert
    assert_eq!(report.to_string(), "BFS Paths: [[2, 1, 3]]\nDFS Paths: [[2, 1, 3]]");
}
