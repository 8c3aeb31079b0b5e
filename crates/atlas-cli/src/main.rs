//! atlas CLI application
//!
//! Command-line front end for the atlas geographic database engine.

mod args;
mod cli;
mod renderer;
mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use atlas_core::{display::OperationStatus, params::SearchContinents, Engine, EngineBuilder, Session};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("atlas started");

    match command {
        Some(Init) => {
            let engine = EngineBuilder::new()
                .with_database_path(database_file)
                .create_if_missing(true)
                .build()
                .await
                .context("Failed to initialize database")?;
            renderer.render(OperationStatus::success(format!(
                "Initialized database at {}",
                engine.database_path().display()
            )))
        }
        Some(Continent { command }) => {
            Cli::new(open_engine(database_file).await?, renderer)
                .handle_continent_command(command)
                .await
        }
        Some(Country { command }) => {
            Cli::new(open_engine(database_file).await?, renderer)
                .handle_country_command(command)
                .await
        }
        Some(Region { command }) => {
            Cli::new(open_engine(database_file).await?, renderer)
                .handle_region_command(command)
                .await
        }
        Some(Serve) => {
            // Without a path the client opens a file with an open_database request
            let session = match database_file {
                Some(path) => Session::with_engine(open_engine(Some(path)).await?),
                None => Session::new(),
            };
            serve::run_stdio(session).await.context("Event loop failed")
        }
        None => {
            Cli::new(open_engine(database_file).await?, renderer)
                .search(&SearchContinents::default())
                .await
        }
    }
}

async fn open_engine(database_file: Option<PathBuf>) -> Result<Engine> {
    EngineBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open database")
}
