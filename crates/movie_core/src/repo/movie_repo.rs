//! Movie repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD statements over the `movies` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_all` orders rows by `id` descending.
//! - Every statement is parameterized; no user text is spliced into SQL.
//! - Read paths reject rows that cannot be represented instead of masking them.

use crate::db::DbError;
use crate::model::movie::{MovieId, MovieRecord};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MOVIE_SELECT_SQL: &str = "SELECT id, title, year, genre FROM movies";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for movie persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted movie data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::InvalidColumnType(_, column, found) => {
                Self::InvalidData(format!("unexpected {found} value in movies.{column}"))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Repository interface for movie CRUD operations.
pub trait MovieRepository {
    fn list_all(&self) -> RepoResult<Vec<MovieRecord>>;
    fn get_by_id(&self, id: MovieId) -> RepoResult<Option<MovieRecord>>;
    fn insert(&self, title: &str, year: i64, genre: &str) -> RepoResult<MovieId>;
    /// Returns `false` when no row has `id`.
    fn update(&self, id: MovieId, title: &str, year: i64, genre: &str) -> RepoResult<bool>;
    /// Returns `false` when no row has `id`.
    fn delete(&self, id: MovieId) -> RepoResult<bool>;
    /// Returns the number of removed rows.
    fn delete_all(&self) -> RepoResult<usize>;
}

/// SQLite-backed movie repository.
pub struct SqliteMovieRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMovieRepository<'conn> {
    /// Wraps a connection returned by `db::open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MovieRepository for SqliteMovieRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<MovieRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MOVIE_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut movies = Vec::new();

        while let Some(row) = rows.next()? {
            movies.push(parse_movie_row(row)?);
        }

        Ok(movies)
    }

    fn get_by_id(&self, id: MovieId) -> RepoResult<Option<MovieRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MOVIE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_movie_row(row)?));
        }

        Ok(None)
    }

    fn insert(&self, title: &str, year: i64, genre: &str) -> RepoResult<MovieId> {
        self.conn.execute(
            "INSERT INTO movies (title, year, genre) VALUES (?1, ?2, ?3);",
            params![title, year, genre],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: MovieId, title: &str, year: i64, genre: &str) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE movies
             SET
                title = ?1,
                year = ?2,
                genre = ?3
             WHERE id = ?4;",
            params![title, year, genre, id],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: MovieId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM movies WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn delete_all(&self) -> RepoResult<usize> {
        let changed = self.conn.execute("DELETE FROM movies;", [])?;
        Ok(changed)
    }
}

fn parse_movie_row(row: &Row<'_>) -> RepoResult<MovieRecord> {
    Ok(MovieRecord {
        id: row.get("id")?,
        title: row.get("title")?,
        year: row.get("year")?,
        genre: row.get("genre")?,
    })
}
