//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::domain::NodeId;

/// Breadth-first and depth-first path search through a maze graph
#[derive(Parser, Debug)]
#[command(name = "mazesearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Node to start from (default: 0)
    #[arg(short, long)]
    pub start: Option<NodeId>,

    /// Node to search for (default: 17)
    #[arg(short, long)]
    pub goal: Option<NodeId>,

    /// TOML graph definition to search instead of the built-in maze
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub graph: Option<PathBuf>,

    /// Config file layered over the global config
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long, conflicts_with = "config_template")]
    pub show_config: bool,

    /// Print a config file template and exit
    #[arg(long)]
    pub config_template: bool,
}
