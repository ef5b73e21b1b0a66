//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the screen's actions as stable functions to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call opens its own connection, so results always reflect the
//!   latest committed writes.
//! - Storage failures always come back as `ok=false`, never as an empty
//!   result.
//! - Form state lives on the Dart side; create input is validated here with
//!   the same rules as `MovieScreen::save`, update input is not.

use log::warn;
use movie_core::db::open_db;
use movie_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_year,
    ping as ping_inner, MovieDraft, MovieId, MovieRecord, MovieService, RepoResult,
    SqliteMovieRepository,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const MOVIES_DB_FILE_NAME: &str = "movies.sqlite3";
const MOVIES_DB_PATH_ENV: &str = "MOVIES_DB_PATH";
static MOVIES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One list row as rendered by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieItem {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub genre: String,
}

impl From<MovieRecord> for MovieItem {
    fn from(movie: MovieRecord) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            genre: movie.genre,
        }
    }
}

/// Snapshot envelope returned by `movies_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListResponse {
    /// Whether the list was read from storage.
    pub ok: bool,
    /// Records ordered newest first; empty on failure.
    pub items: Vec<MovieItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieActionResponse {
    /// Whether the action wrote something.
    pub ok: bool,
    /// Affected movie id, when the action targets one.
    pub movie_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Lookup envelope returned by `movie_get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieGetResponse {
    /// Whether the lookup reached storage.
    pub ok: bool,
    /// The movie, or `None` when no row has the id.
    pub item: Option<MovieItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl MovieActionResponse {
    fn success(message: impl Into<String>, movie_id: Option<MovieId>) -> Self {
        Self {
            ok: true,
            movie_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            movie_id: None,
            message: message.into(),
        }
    }
}

/// Lists every movie, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn movies_list() -> MovieListResponse {
    list_movies_at(&resolve_movies_db_path())
}

/// Fetches one movie for the edit form.
///
/// # FFI contract
/// - A missing id returns `ok=true` with `item=None`.
/// - A storage failure returns `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn movie_get(id: i64) -> MovieGetResponse {
    get_movie_at(&resolve_movies_db_path(), id)
}

/// Validates raw form text and inserts a new movie.
///
/// # FFI contract
/// - Invalid input returns `ok=false` and writes nothing.
/// - Returns the assigned id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn movie_save(title: String, year: String, genre: String) -> MovieActionResponse {
    save_movie_at(&resolve_movies_db_path(), &title, &year, &genre)
}

/// Overwrites an existing movie with trimmed form text.
///
/// # FFI contract
/// - Title/genre emptiness and year sign are not checked.
/// - `year` must start with an integer.
/// - A missing `id` succeeds with message `Nothing to update.`.
#[flutter_rust_bridge::frb(sync)]
pub fn movie_update(id: i64, title: String, year: String, genre: String) -> MovieActionResponse {
    update_movie_at(&resolve_movies_db_path(), id, &title, &year, &genre)
}

/// Deletes one movie; a missing `id` still succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn movie_delete(id: i64) -> MovieActionResponse {
    delete_movie_at(&resolve_movies_db_path(), id)
}

/// Deletes every movie.
#[flutter_rust_bridge::frb(sync)]
pub fn movies_clear() -> MovieActionResponse {
    clear_movies_at(&resolve_movies_db_path())
}

fn list_movies_at(db_path: &Path) -> MovieListResponse {
    match with_movie_service(db_path, |service| service.list_movies()) {
        Ok(movies) => {
            let items = movies.into_iter().map(MovieItem::from).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No movies.".to_string()
            } else {
                format!("Loaded {} movie(s).", items.len())
            };
            MovieListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => MovieListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("movies_list failed: {err}"),
        },
    }
}

fn get_movie_at(db_path: &Path, id: MovieId) -> MovieGetResponse {
    match with_movie_service(db_path, |service| service.get_movie(id)) {
        Ok(Some(movie)) => MovieGetResponse {
            ok: true,
            item: Some(MovieItem::from(movie)),
            message: "Movie loaded.".to_string(),
        },
        Ok(None) => MovieGetResponse {
            ok: true,
            item: None,
            message: format!("No movie with id {id}."),
        },
        Err(err) => MovieGetResponse {
            ok: false,
            item: None,
            message: format!("movie_get failed: {err}"),
        },
    }
}

fn save_movie_at(db_path: &Path, title: &str, year: &str, genre: &str) -> MovieActionResponse {
    let draft = match MovieDraft::parse(title, year, genre) {
        Ok(draft) => draft,
        Err(err) => {
            return MovieActionResponse::failure(format!("movie_save rejected: {err}"));
        }
    };

    match with_movie_service(db_path, |service| service.create_movie(&draft)) {
        Ok(id) => MovieActionResponse::success("Movie saved.", Some(id)),
        Err(err) => MovieActionResponse::failure(format!("movie_save failed: {err}")),
    }
}

fn update_movie_at(
    db_path: &Path,
    id: MovieId,
    title: &str,
    year: &str,
    genre: &str,
) -> MovieActionResponse {
    let Some(year) = parse_year(year) else {
        return MovieActionResponse::failure("movie_update rejected: year must be an integer");
    };

    let (title, genre) = (title.trim(), genre.trim());
    match with_movie_service(db_path, |service| {
        service.update_movie(id, title, year, genre)
    }) {
        Ok(true) => MovieActionResponse::success("Movie updated.", Some(id)),
        Ok(false) => MovieActionResponse::success("Nothing to update.", Some(id)),
        Err(err) => MovieActionResponse::failure(format!("movie_update failed: {err}")),
    }
}

fn delete_movie_at(db_path: &Path, id: MovieId) -> MovieActionResponse {
    match with_movie_service(db_path, |service| service.delete_movie(id)) {
        Ok(true) => MovieActionResponse::success("Movie deleted.", Some(id)),
        Ok(false) => MovieActionResponse::success("Nothing to delete.", Some(id)),
        Err(err) => MovieActionResponse::failure(format!("movie_delete failed: {err}")),
    }
}

fn clear_movies_at(db_path: &Path) -> MovieActionResponse {
    match with_movie_service(db_path, |service| service.clear_movies()) {
        Ok(removed) => MovieActionResponse::success(format!("Removed {removed} movie(s)."), None),
        Err(err) => MovieActionResponse::failure(format!("movies_clear failed: {err}")),
    }
}

fn resolve_movies_db_path() -> PathBuf {
    MOVIES_DB_PATH
        .get_or_init(|| db_path_from_env(std::env::var(MOVIES_DB_PATH_ENV).ok()))
        .clone()
}

fn db_path_from_env(raw: Option<String>) -> PathBuf {
    match raw.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join(MOVIES_DB_FILE_NAME),
    }
}

fn with_movie_service<T>(
    db_path: &Path,
    f: impl FnOnce(&MovieService<SqliteMovieRepository<'_>>) -> RepoResult<T>,
) -> Result<T, String> {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error error_code=db_open_failed error={err}");
            return Err(format!("movies DB open failed: {err}"));
        }
    };
    let service = MovieService::new(SqliteMovieRepository::new(&conn));
    f(&service).map_err(|err| {
        warn!("event=ffi_call module=ffi status=error error_code=storage_failed error={err}");
        err.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::{
        clear_movies_at, core_version, db_path_from_env, delete_movie_at, get_movie_at,
        init_logging, list_movies_at, ping, save_movie_at, update_movie_at, MOVIES_DB_FILE_NAME,
    };
    use log::warn;
use movie_core::db::open_db;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_db() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("movies.sqlite3");
        (dir, path)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn db_path_prefers_non_blank_env_value() {
        let default = std::env::temp_dir().join(MOVIES_DB_FILE_NAME);
        assert_eq!(db_path_from_env(None), default);
        assert_eq!(db_path_from_env(Some("  ".to_string())), default);
        assert_eq!(
            db_path_from_env(Some(" /data/movies.db ".to_string())),
            PathBuf::from("/data/movies.db")
        );
    }

    #[test]
    fn save_then_list_and_get() {
        let (_dir, db) = test_db();

        let saved = save_movie_at(&db, "  Dune ", "2021", "Sci-Fi");
        assert!(saved.ok, "{}", saved.message);
        let id = saved.movie_id.expect("save should return movie_id");
        let second = save_movie_at(&db, "Amelie", "2001", "Romance");
        assert!(second.ok, "{}", second.message);

        let listed = list_movies_at(&db);
        assert!(listed.ok, "{}", listed.message);
        let titles = listed
            .items
            .iter()
            .map(|item| item.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Amelie", "Dune"]);

        let loaded = get_movie_at(&db, id);
        assert!(loaded.ok, "{}", loaded.message);
        let item = loaded.item.expect("saved movie should load");
        assert_eq!(item.year, 2021);
        assert_eq!(item.genre, "Sci-Fi");
    }

    #[test]
    fn save_rejects_invalid_input() {
        let (_dir, db) = test_db();

        let response = save_movie_at(&db, "Dune", "abc", "Drama");
        assert!(!response.ok);
        assert!(response.message.contains("year"));

        let blank = save_movie_at(&db, " ", "2001", "Drama");
        assert!(!blank.ok);
        assert!(list_movies_at(&db).items.is_empty());
    }

    #[test]
    fn update_overwrites_fields_without_validation() {
        let (_dir, db) = test_db();
        let saved = save_movie_at(&db, "Ran", "1985", "Drama");
        let id = saved.movie_id.expect("save should return movie_id");

        let updated = update_movie_at(&db, id, " ", "0", " Noir ");
        assert!(updated.ok, "{}", updated.message);

        let conn = open_db(&db).expect("open db");
        let (title, year, genre): (String, i64, String) = conn
            .query_row(
                "SELECT title, year, genre FROM movies WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .expect("query movie row");
        assert_eq!(title, "");
        assert_eq!(year, 0);
        assert_eq!(genre, "Noir");
    }

    #[test]
    fn update_rejects_year_without_integer() {
        let (_dir, db) = test_db();
        let saved = save_movie_at(&db, "Ran", "1985", "Drama");
        let id = saved.movie_id.expect("save should return movie_id");

        let updated = update_movie_at(&db, id, "Ran", "soon", "Drama");
        assert!(!updated.ok);
        let item = get_movie_at(&db, id).item.expect("movie should remain");
        assert_eq!(item.year, 1985);
    }

    #[test]
    fn missing_id_is_noop_for_update_delete_and_get() {
        let (_dir, db) = test_db();
        let missing = i64::MAX;

        let updated = update_movie_at(&db, missing, "x", "1", "y");
        assert!(updated.ok);
        assert_eq!(updated.message, "Nothing to update.");

        let deleted = delete_movie_at(&db, missing);
        assert!(deleted.ok);
        assert_eq!(deleted.message, "Nothing to delete.");

        let loaded = get_movie_at(&db, missing);
        assert!(loaded.ok, "{}", loaded.message);
        assert!(loaded.item.is_none());
    }

    #[test]
    fn delete_removes_row() {
        let (_dir, db) = test_db();
        let saved = save_movie_at(&db, "Jaws", "1975", "Thriller");
        let id = saved.movie_id.expect("save should return movie_id");

        let deleted = delete_movie_at(&db, id);
        assert!(deleted.ok);
        assert_eq!(deleted.message, "Movie deleted.");
        assert!(get_movie_at(&db, id).item.is_none());
    }

    #[test]
    fn clear_removes_every_row() {
        let (_dir, db) = test_db();
        for title in ["Jaws", "Jaws 2", "Jaws 3-D"] {
            assert!(save_movie_at(&db, title, "1975", "Thriller").ok);
        }

        let cleared = clear_movies_at(&db);
        assert!(cleared.ok, "{}", cleared.message);
        assert_eq!(cleared.message, "Removed 3 movie(s).");
        assert!(cleared.movie_id.is_none());

        let listed = list_movies_at(&db);
        assert!(listed.ok);
        assert!(listed.items.is_empty());
    }

    #[test]
    fn storage_failure_is_not_reported_as_absent() {
        // A directory cannot be opened as a database file.
        let dir = tempfile::tempdir().expect("create temp dir");

        let loaded = get_movie_at(dir.path(), 1);
        assert!(!loaded.ok);
        assert!(loaded.item.is_none());
        assert!(loaded.message.contains("movie_get failed"));

        let listed = list_movies_at(dir.path());
        assert!(!listed.ok);
        assert!(listed.message.contains("movies_list failed"));

        assert!(!save_movie_at(dir.path(), "Dune", "2021", "Sci-Fi").ok);
        assert!(!delete_movie_at(dir.path(), 1).ok);
        assert!(!clear_movies_at(dir.path()).ok);
    }
}
