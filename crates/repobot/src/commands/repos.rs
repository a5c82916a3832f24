//! `repobot repos` -- list configured repositories.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_lines};

/// Execute the `repobot repos` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let store = ctx.load_store()?;
    let repos = store.list_repos();

    if ctx.json {
        output_json(&repos);
    } else if repos.is_empty() {
        if !ctx.quiet {
            println!("No repositories configured");
        }
    } else {
        output_lines(&repos);
    }

    Ok(())
}
