//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the built-in maze, `0` -> `17`)
//! 2. Global config: `$XDG_CONFIG_HOME/mazesearch/mazesearch.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `MAZESEARCH_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::maze::{MAZE_GOAL, MAZE_START};
use crate::application::ApplicationError;
use crate::domain::NodeId;

/// Unified configuration for mazesearch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Node the searches start from
    pub start: NodeId,
    /// Node the searches look for
    pub goal: NodeId,
    /// TOML graph definition to search instead of the built-in maze
    pub graph: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start: MAZE_START,
            goal: MAZE_GOAL,
            graph: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → field not specified, inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub start: Option<NodeId>,
    pub goal: Option<NodeId>,
    pub graph: Option<PathBuf>,
}

/// Get the XDG config directory for mazesearch.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mazesearch").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mazesearch.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand shell variables and tilde in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in the graph path.
    fn expand_paths(&mut self) {
        if let Some(graph) = &self.graph {
            let expanded = expand_env_vars(graph.to_string_lossy().as_ref());
            self.graph = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base): overlay wins if Some, otherwise keep base.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            start: overlay.start.unwrap_or(self.start),
            goal: overlay.goal.unwrap_or(self.goal),
            graph: overlay.graph.clone().or_else(|| self.graph.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file given on the command line
    ///
    /// A missing global config is skipped; a missing local config is an error.
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Local config
        if let Some(local_path) = local {
            debug!("load: local config {}", local_path.display());
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply MAZESEARCH_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("MAZESEARCH").try_parsing(true))
            .build()
            .map_err(config_err)?;

        // A present but unparsable node id is an error, not a missing key
        if let Ok(val) = config.get_string("start") {
            settings.start = node_id("MAZESEARCH_START", &val)?;
        }
        if let Ok(val) = config.get_string("goal") {
            settings.goal = node_id("MAZESEARCH_GOAL", &val)?;
        }
        if let Ok(val) = config.get_string("graph") {
            settings.graph = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mazesearch configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mazesearch/mazesearch.toml
#   Local:  file passed with --config
#   Env:    MAZESEARCH_START, MAZESEARCH_GOAL, MAZESEARCH_GRAPH
#   Flags:  --start, --goal, --graph

# Node the searches start from
# start = 0

# Node the searches look for
# goal = 17

# Graph definition to search instead of the built-in maze:
#   directed = false
#   nodes = [0, 1, 2]
#   edges = [[0, 1], [1, 2]]
# graph = "~/mazes/small.toml"
"#
        .to_string()
    }
}

fn node_id(key: &str, value: &str) -> Result<NodeId, ApplicationError> {
    value.trim().parse::<NodeId>().map_err(|_| ApplicationError::Config {
        message: format!("{key}: {value} is not a valid node id"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_searches_the_maze() {
        let settings = Settings::default();
        assert_eq!(settings.start, 0);
        assert_eq!(settings.goal, 17);
        assert!(settings.graph.is_none());
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unset_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            start: None,
            goal: Some(3),
            graph: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.start, 0);
        assert_eq!(merged.goal, 3);
    }

    #[test]
    fn given_tilde_in_graph_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            graph: Some(PathBuf::from("~/maze.toml")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let graph = settings.graph.unwrap();
        let graph_str = graph.to_string_lossy();
        assert!(graph_str.starts_with(&home), "graph should start with home: {graph_str}");
        assert!(!graph_str.contains('~'));
    }

    #[test]
    fn given_malformed_value_when_converting_node_id_then_errors() {
        assert!(node_id("MAZESEARCH_START", "-1").is_err());
        assert!(node_id("MAZESEARCH_GOAL", "seventeen").is_err());
        assert!(node_id("MAZESEARCH_GOAL", "4294967296").is_err());
        assert_eq!(node_id("MAZESEARCH_START", "4").unwrap(), 4);
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_fields() {
        let toml_str = Settings::default().to_toml().unwrap();
        assert!(toml_str.contains("start = 0"));
        assert!(toml_str.contains("goal = 17"));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.start.is_none());
    }
}
