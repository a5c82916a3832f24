//! Clap CLI definitions for the `repobot` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use repobot_config::RepoRef;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "repobot.json";

/// repobot -- inspect per-repository bot configuration.
#[derive(Parser, Debug)]
#[command(
    name = "repobot",
    about = "Inspect per-repository bot configuration",
    long_about = "Look up organization, repository, label and template settings in a repobot JSON configuration file. Keys are matched case-insensitively, ignoring surrounding whitespace.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration file to read.
    #[arg(
        short = 'c',
        long,
        global = true,
        env = "REPOBOT_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured repositories.
    #[command(alias = "ls")]
    Repos,

    /// Show the settings for a repository.
    Repo(RepoArgs),

    /// Show the settings for one label of a repository.
    Label(LabelArgs),

    /// List the labels configured for a repository.
    Labels(RepoArgs),

    /// Show the settings for one template of a repository.
    Template(TemplateArgs),

    /// List the templates configured for a repository.
    Templates(RepoArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Arguments naming a single repository.
#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Repository as <org>/<name>.
    pub repo: RepoRef,
}

/// Arguments for `repobot label`.
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Repository as <org>/<name>.
    pub repo: RepoRef,

    /// Label name.
    pub label: String,
}

/// Arguments for `repobot template`.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Repository as <org>/<name>.
    pub repo: RepoRef,

    /// Template name.
    pub template: String,
}

/// Arguments for `repobot completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
