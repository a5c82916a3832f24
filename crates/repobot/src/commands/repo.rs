//! `repobot repo` -- show the settings for one repository.

use anyhow::{Result, bail};

use crate::cli::RepoArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_value};

/// Execute the `repobot repo` command.
pub fn run(ctx: &RuntimeContext, args: &RepoArgs) -> Result<()> {
    let store = ctx.load_store()?;
    let repo = &args.repo;

    match store.repo_config(&repo.org, &repo.name) {
        Some(settings) if ctx.json => output_json(settings),
        Some(settings) => output_value(settings),
        None if ctx.json => output_json(&serde_json::Value::Null),
        None => bail!("no configuration for repository {}", repo),
    }

    Ok(())
}
