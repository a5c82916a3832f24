//! `repobot` -- inspect per-repository bot configuration.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    let ctx = RuntimeContext::from_global_args(&cli.global);

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("repobot=debug,repobot_config=trace")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match &cli.command {
        Some(Commands::Repos) => commands::repos::run(&ctx),
        Some(Commands::Repo(args)) => commands::repo::run(&ctx, args),
        Some(Commands::Label(args)) => commands::label::run_show(&ctx, args),
        Some(Commands::Labels(args)) => commands::label::run_list(&ctx, args),
        Some(Commands::Template(args)) => commands::template::run_show(&ctx, args),
        Some(Commands::Templates(args)) => commands::template::run_list(&ctx, args),
        Some(Commands::Completion(args)) => commands::completion::run(args),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if ctx.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
