//! `repobot template` / `repobot templates` -- per-template settings of a repository.

use anyhow::{Result, bail};

use crate::cli::{RepoArgs, TemplateArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_lines, output_value};

/// Execute the `repobot template` command.
pub fn run_show(ctx: &RuntimeContext, args: &TemplateArgs) -> Result<()> {
    let store = ctx.load_store()?;
    let repo = &args.repo;

    match store.repo_template_config(&repo.org, &repo.name, &args.template) {
        Some(settings) if ctx.json => output_json(settings),
        Some(settings) => output_value(settings),
        None if ctx.json => output_json(&serde_json::Value::Null),
        None => bail!(
            "no configuration for template '{}' in {}",
            args.template,
            repo
        ),
    }

    Ok(())
}

/// Execute the `repobot templates` command.
pub fn run_list(ctx: &RuntimeContext, args: &RepoArgs) -> Result<()> {
    let store = ctx.load_store()?;
    let repo = &args.repo;
    let names = store.repo_template_names(&repo.org, &repo.name);

    if ctx.json {
        output_json(&names);
    } else if names.is_empty() {
        if !ctx.quiet {
            println!("No templates configured for {}", repo);
        }
    } else {
        output_lines(names);
    }

    Ok(())
}
