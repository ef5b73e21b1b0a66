//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use movie_core::MovieId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "movies")]
#[command(about = "Keep a local list of movies in SQLite", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "MOVIES_DB_PATH", default_value = "movies.sqlite3")]
    pub db: PathBuf,

    /// Log level (trace, debug, info, warn, error); needs --log-dir
    #[arg(long, requires = "log_dir")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Print the movie list as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all movies, newest first
    List,

    /// Show one movie
    Show { id: MovieId },

    /// Add a movie
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        year: String,

        #[arg(short, long)]
        genre: String,
    },

    /// Edit a movie; omitted fields keep their stored value
    Edit {
        id: MovieId,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Delete one movie
    Delete { id: MovieId },

    /// Delete every movie
    Clear,
}
