//! Command dispatch

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Resolve settings from config layers and flags.
///
/// Flags win over every config layer.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(start) = cli.start {
        settings.start = start;
    }
    if let Some(goal) = cli.goal {
        settings.goal = goal;
    }
    if let Some(graph) = &cli.graph {
        settings.graph = Some(graph.clone());
    }
    Ok(settings)
}

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if cli.config_template {
        return output::info(&Settings::template()).map_err(Into::into);
    }

    let settings = resolve_settings(cli)?;
    debug!("settings: {:?}", settings);
    if cli.show_config {
        return output::info(&settings.to_toml()?).map_err(Into::into);
    }

    let container = ServiceContainer::new(settings);
    let settings = &container.settings;
    let graph = container.traversal.load_graph(settings.graph.as_deref())?;
    let report = container
        .traversal
        .run(&graph, settings.start, settings.goal)?;
    output::info(&report)?;
    Ok(())
}
