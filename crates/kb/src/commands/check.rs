//! `kb check` command implementation.

use std::path::PathBuf;

use clap::Args;
use kb_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover kb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or validate.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref())?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Configuration: {}", path.display()));
        } else {
            output.info("Configuration: built-in defaults (no kb.toml found)");
        }

        let theme = config.into_theme()?;

        output.highlight(&format!("{} ({})", theme.title(), theme.lang()));
        output.info(&format!("Nav entries: {}", theme.top_nav().len()));
        output.info(&format!("Search provider: {}", theme.search_provider().name()));

        for prefix in theme.sidebar().prefixes() {
            let groups = theme.sidebar().groups(prefix).unwrap_or(&[]);
            let entries: usize = groups.iter().map(|g| g.entries().len()).sum();
            output.info(&format!(
                "Sidebar {prefix}: {} group(s), {entries} entries",
                groups.len()
            ));
        }

        output.success("Configuration OK");
        Ok(())
    }
}
