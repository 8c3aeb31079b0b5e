use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ContinentCommands, CountryCommands, RegionCommands};

/// Search and edit a geographic database of continents, countries and
/// regions
///
/// Records live in a SQLite file holding one table per kind. Countries
/// belong to a continent and regions belong to both a continent and a
/// country; saves that point at a missing parent are rejected.
#[derive(Parser)]
#[command(version, about, name = "atlas")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/atlas/atlas.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the atlas CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a database file with the continent, country and region tables
    Init,
    /// Search and edit continents
    #[command(alias = "ct")]
    Continent {
        #[command(subcommand)]
        command: ContinentCommands,
    },
    /// Search and edit countries
    #[command(alias = "co")]
    Country {
        #[command(subcommand)]
        command: CountryCommands,
    },
    /// Search and edit regions
    #[command(alias = "r")]
    Region {
        #[command(subcommand)]
        command: RegionCommands,
    },
    /// Answer JSON request events read line by line from stdin
    Serve,
}
