//! `movies` command-line front end.
//!
//! # Responsibility
//! - Map each subcommand onto one `MovieScreen` action.
//! - Print the refreshed list after every mutation.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use movie_core::db::{open_db, DbError};
use movie_core::{
    default_log_level, init_logging, MovieId, MovieRecord, MovieScreen, MovieService,
    MovieValidationError, RepoError, SqliteMovieRepository, SubmitOutcome,
};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
enum CliError {
    Db(DbError),
    Repo(RepoError),
    Logging(String),
    Rejected(MovieValidationError),
    NotFound(MovieId),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "database error: {err}"),
            Self::Repo(err) => write!(f, "storage error: {err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Rejected(err) => write!(f, "rejected: {err}"),
            Self::NotFound(id) => write!(f, "movie not found: {id}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected(_) => 2,
            Self::NotFound(_) => 3,
            _ => 1,
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy()).map_err(CliError::Logging)?;
    }

    let conn = open_db(&cli.db)?;
    let service = MovieService::new(SqliteMovieRepository::new(&conn));

    // Single lookups skip the screen so the full list is never loaded.
    let command = match cli.command {
        Commands::Show { id } => {
            let movie = service.get_movie(id)?.ok_or(CliError::NotFound(id))?;
            return print_movies(std::slice::from_ref(&movie), cli.json);
        }
        command => command,
    };

    let mut screen = MovieScreen::new(service)?;
    match command {
        Commands::List | Commands::Show { .. } => {}
        Commands::Add { title, year, genre } => {
            screen.set_title(title);
            screen.set_year(year);
            screen.set_genre(genre);
            report(screen.submit()?)?;
        }
        Commands::Edit {
            id,
            title,
            year,
            genre,
        } => {
            if !screen.begin_edit(id)? {
                return Err(CliError::NotFound(id));
            }
            if let Some(title) = title {
                screen.set_title(title);
            }
            if let Some(year) = year {
                screen.set_year(year);
            }
            if let Some(genre) = genre {
                screen.set_genre(genre);
            }
            report(screen.submit()?)?;
        }
        Commands::Delete { id } => {
            if screen.delete(id)? {
                eprintln!("deleted {id}");
            } else {
                eprintln!("nothing to delete for {id}");
            }
        }
        Commands::Clear => {
            let removed = screen.clear_all()?;
            eprintln!("removed {removed} movie(s)");
        }
    }

    print_movies(screen.movies(), cli.json)
}

fn report(outcome: SubmitOutcome) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Inserted(id) => eprintln!("saved {id}"),
        SubmitOutcome::Updated { id, changed: true } => eprintln!("updated {id}"),
        SubmitOutcome::Updated { id, changed: false } => eprintln!("nothing to update for {id}"),
        SubmitOutcome::Rejected(err) => return Err(CliError::Rejected(err)),
        SubmitOutcome::Disabled => {}
    }
    Ok(())
}

fn print_movies(movies: &[MovieRecord], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(movies)?);
        return Ok(());
    }

    for movie in movies {
        println!(
            "{:>4}  {} - {} - {}",
            movie.id, movie.title, movie.year, movie.genre
        );
    }
    Ok(())
}
