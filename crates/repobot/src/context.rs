//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the state a command handler needs: the
//! configuration file to read and the global output flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use repobot_config::{ConfigStore, load_config};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Configuration file path (from `--config`, `$REPOBOT_CONFIG`, or the default).
    pub config_path: PathBuf,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            config_path: global.config.clone(),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Load the configuration file into a store.
    pub fn load_store(&self) -> Result<ConfigStore> {
        load_config(&self.config_path).with_context(|| {
            format!(
                "failed to load configuration from {}",
                self.config_path.display()
            )
        })
    }
}
