//! Core domain logic for the movie shelf.
//! This crate is the single source of truth for storage and form rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::movie::{parse_year, MovieDraft, MovieId, MovieRecord, MovieValidationError};
pub use repo::movie_repo::{MovieRepository, RepoError, RepoResult, SqliteMovieRepository};
pub use service::movie_screen::{FormMode, MovieForm, MovieScreen, SubmitOutcome};
pub use service::movie_service::MovieService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
