//! nota CLI - manage notes on a remote notes API
//!
//! Thin front end over the shared list controller: every command loads the
//! remote collection, applies its operation, and prints the result.

mod cli;
mod commands;
mod config;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::config::resolve_api_url;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nota=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let api_url_flag = cli.api_url.clone();

    match cli.command {
        // Completions never touch the network, so no URL resolution for them.
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Add { content }) => {
            run_add(&content, &resolve_api_url(api_url_flag)?).await?;
        }
        Some(Commands::List { search, json }) => {
            run_list(search.as_deref(), json, &resolve_api_url(api_url_flag)?).await?;
        }
        Some(Commands::Search { term, json }) => {
            run_search(&term, json, &resolve_api_url(api_url_flag)?).await?;
        }
        Some(Commands::Delete { id }) => {
            run_delete(id, &resolve_api_url(api_url_flag)?).await?;
        }
        Some(Commands::Export { id, output }) => {
            run_export(id, output.as_deref(), &resolve_api_url(api_url_flag)?).await?;
        }
        None => {
            // Quick capture mode: nota "my note"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.note, &resolve_api_url(api_url_flag)?).await?;
            }
        }
    }

    Ok(())
}
