//! folio-cli: terminal reader for a personal technical blog.
//! Builds the shared content store once per invocation and resolves the
//! requested view against it, exactly as the page layer would.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod handlers;
mod print;
#[cfg(test)]
mod tests;

use std::process;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;

use folio::api::{ApiClient, FetchError};
use folio::config::{self, LoadError};
use folio::store::ContentStore;
use folio::telemetry::{self, TelemetryError};

use crate::args::{Cli, Commands};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::load(cli.config_file.as_deref(), &cli.overrides)?;
    telemetry::init(&settings.logging)?;

    let api = Arc::new(ApiClient::new(
        settings.api.base_url.as_str(),
        settings.api.fetch_timeout,
    )?);
    let store = Arc::new(ContentStore::new(
        Arc::clone(&api),
        settings.api.cache_posts_limit.get(),
    ));
    store.initialize().await;

    match cli.command {
        Commands::Home => handlers::home::handle(&store),
        Commands::Posts(cmd) => handlers::posts::list(&store, &api, cmd).await,
        Commands::Categories => handlers::categories::list(&store),
        Commands::Category { slug } => handlers::categories::detail(&store, &slug),
        Commands::Tags => handlers::tags::handle(&store),
        Commands::Show { id } => handlers::posts::show(&api, &id).await,
    }

    Ok(())
}
