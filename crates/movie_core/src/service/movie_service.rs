//! Movie use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - Create paths only accept a validated `MovieDraft`.
//! - Log lines carry ids and counts, never titles or genres.

use crate::model::movie::{MovieDraft, MovieId, MovieRecord};
use crate::repo::movie_repo::{MovieRepository, RepoResult};
use log::{debug, info};

/// Use-case service wrapper for movie CRUD operations.
pub struct MovieService<R: MovieRepository> {
    repo: R,
}

impl<R: MovieRepository> MovieService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every movie, newest first.
    pub fn list_movies(&self) -> RepoResult<Vec<MovieRecord>> {
        let movies = self.repo.list_all()?;
        debug!(
            "event=movie_list module=service status=ok count={}",
            movies.len()
        );
        Ok(movies)
    }

    /// Gets one movie by id.
    pub fn get_movie(&self, id: MovieId) -> RepoResult<Option<MovieRecord>> {
        self.repo.get_by_id(id)
    }

    /// Persists a validated draft and returns the assigned id.
    pub fn create_movie(&self, draft: &MovieDraft) -> RepoResult<MovieId> {
        let id = self
            .repo
            .insert(draft.title.as_str(), draft.year, draft.genre.as_str())?;
        info!("event=movie_insert module=service status=ok id={id}");
        Ok(id)
    }

    /// Overwrites title/year/genre of `id`.
    ///
    /// # Contract
    /// - Values are stored as given; no validation runs here.
    /// - Returns `Ok(false)` when `id` does not exist.
    pub fn update_movie(
        &self,
        id: MovieId,
        title: &str,
        year: i64,
        genre: &str,
    ) -> RepoResult<bool> {
        let changed = self.repo.update(id, title, year, genre)?;
        info!("event=movie_update module=service status=ok id={id} changed={changed}");
        Ok(changed)
    }

    /// Deletes `id`; returns `Ok(false)` when it does not exist.
    pub fn delete_movie(&self, id: MovieId) -> RepoResult<bool> {
        let changed = self.repo.delete(id)?;
        info!("event=movie_delete module=service status=ok id={id} changed={changed}");
        Ok(changed)
    }

    /// Removes every movie and returns how many rows were dropped.
    pub fn clear_movies(&self) -> RepoResult<usize> {
        let removed = self.repo.delete_all()?;
        info!("event=movie_clear module=service status=ok removed={removed}");
        Ok(removed)
    }
}
