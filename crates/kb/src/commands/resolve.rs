//! `kb resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use kb_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Page path to resolve (e.g. "/vue/components").
    path: String,

    /// Path to configuration file (default: auto-discover kb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved groups as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or the JSON
    /// output cannot be serialized.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref())?;
        let theme = config.into_theme()?;

        let groups = theme.sidebar_for(&self.path);

        if self.json {
            output.data(&serde_json::to_string_pretty(groups)?);
            return Ok(());
        }

        if groups.is_empty() {
            output.info(&format!("No sidebar for {} (page renders without one)", self.path));
            return Ok(());
        }

        for group in groups {
            output.highlight(group.title());
            for entry in group.entries() {
                output.data(&format!("  {} -> {}", entry.label(), entry.target()));
            }
        }

        Ok(())
    }
}
