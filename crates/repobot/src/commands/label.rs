//! `repobot label` / `repobot labels` -- per-label settings of a repository.

use anyhow::{Result, bail};

use crate::cli::{LabelArgs, RepoArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_lines, output_value};

/// Execute the `repobot label` command.
pub fn run_show(ctx: &RuntimeContext, args: &LabelArgs) -> Result<()> {
    let store = ctx.load_store()?;
    let repo = &args.repo;

    match store.repo_label_config(&repo.org, &repo.name, &args.label) {
        Some(settings) if ctx.json => output_json(settings),
        Some(settings) => output_value(settings),
        None if ctx.json => output_json(&serde_json::Value::Null),
        None => bail!("no configuration for label '{}' in {}", args.label, repo),
    }

    Ok(())
}

/// Execute the `repobot labels` command.
pub fn run_list(ctx: &RuntimeContext, args: &RepoArgs) -> Result<()> {
    let store = ctx.load_store()?;
    let repo = &args.repo;
    let names = store.repo_label_names(&repo.org, &repo.name);

    if ctx.json {
        output_json(&names);
    } else if names.is_empty() {
        if !ctx.quiet {
            println!("No labels configured for {}", repo);
        }
    } else {
        output_lines(names);
    }

    Ok(())
}
