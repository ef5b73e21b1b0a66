//! Form/list screen state for the movie shelf.
//!
//! # Responsibility
//! - Hold form text, the create/edit mode flag and the list snapshot.
//! - Run each user action against `MovieService` and refresh the snapshot.
//!
//! # Invariants
//! - The snapshot is re-fetched after every mutating action before the
//!   action returns; callers never observe a stale list.
//! - Create validates its input; update stores trimmed values as given and
//!   only requires the year text to contain an integer.
//! - Rejected input leaves form, mode and snapshot untouched.

use crate::model::movie::{parse_year, MovieDraft, MovieId, MovieRecord, MovieValidationError};
use crate::repo::movie_repo::{MovieRepository, RepoResult};
use crate::service::movie_service::MovieService;
use log::debug;

/// Raw form text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub year: String,
    pub genre: String,
}

/// Whether submitting the form inserts or updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(MovieId),
}

/// Result of a form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Inserted(MovieId),
    /// `changed` is `false` when the edited row vanished before submit.
    Updated {
        id: MovieId,
        changed: bool,
    },
    /// Input did not pass validation; nothing was written.
    Rejected(MovieValidationError),
    /// The action is not available in the current mode.
    Disabled,
}

/// Screen controller driving one form and one list.
pub struct MovieScreen<R: MovieRepository> {
    service: MovieService<R>,
    form: MovieForm,
    mode: FormMode,
    movies: Vec<MovieRecord>,
}

impl<R: MovieRepository> MovieScreen<R> {
    /// Creates the screen in create mode and loads the initial snapshot.
    pub fn new(service: MovieService<R>) -> RepoResult<Self> {
        let mut screen = Self {
            service,
            form: MovieForm::default(),
            mode: FormMode::Create,
            movies: Vec::new(),
        };
        screen.load()?;
        Ok(screen)
    }

    /// Re-fetches the snapshot from storage.
    pub fn load(&mut self) -> RepoResult<&[MovieRecord]> {
        self.movies = self.service.list_movies()?;
        Ok(&self.movies)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.form.year = year.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.form.genre = genre.into();
    }

    /// Runs the action matching the current mode.
    pub fn submit(&mut self) -> RepoResult<SubmitOutcome> {
        match self.mode {
            FormMode::Create => self.save(),
            FormMode::Edit(_) => self.apply_update(),
        }
    }

    /// Validates the form and inserts a new movie.
    ///
    /// Returns [`SubmitOutcome::Disabled`] in edit mode.
    pub fn save(&mut self) -> RepoResult<SubmitOutcome> {
        if self.mode != FormMode::Create {
            return Ok(SubmitOutcome::Disabled);
        }

        let draft = match MovieDraft::parse(&self.form.title, &self.form.year, &self.form.genre) {
            Ok(draft) => draft,
            Err(err) => return Ok(self.reject(err)),
        };

        let id = self.service.create_movie(&draft)?;
        self.form = MovieForm::default();
        self.load()?;
        Ok(SubmitOutcome::Inserted(id))
    }

    /// Writes the form over the movie being edited and returns to create mode.
    ///
    /// Returns [`SubmitOutcome::Disabled`] in create mode.
    pub fn apply_update(&mut self) -> RepoResult<SubmitOutcome> {
        let FormMode::Edit(id) = self.mode else {
            return Ok(SubmitOutcome::Disabled);
        };

        // The year column is NOT NULL; text without an integer cannot be stored.
        let Some(year) = parse_year(&self.form.year) else {
            return Ok(self.reject(MovieValidationError::InvalidYear));
        };

        let title = self.form.title.trim();
        let genre = self.form.genre.trim();
        let changed = self.service.update_movie(id, title, year, genre)?;
        self.form = MovieForm::default();
        self.mode = FormMode::Create;
        self.load()?;
        Ok(SubmitOutcome::Updated { id, changed })
    }

    /// Copies a stored movie into the form and enters edit mode.
    ///
    /// Returns `false` and changes nothing when `id` does not exist.
    pub fn begin_edit(&mut self, id: MovieId) -> RepoResult<bool> {
        let Some(movie) = self.service.get_movie(id)? else {
            debug!("event=movie_edit module=screen status=skipped id={id} reason=not_found");
            return Ok(false);
        };

        self.form = MovieForm {
            title: movie.title,
            year: movie.year.to_string(),
            genre: movie.genre,
        };
        self.mode = FormMode::Edit(id);
        Ok(true)
    }

    /// Deletes one movie and reloads.
    pub fn delete(&mut self, id: MovieId) -> RepoResult<bool> {
        let changed = self.service.delete_movie(id)?;
        self.load()?;
        Ok(changed)
    }

    /// Deletes every movie and reloads.
    pub fn clear_all(&mut self) -> RepoResult<usize> {
        let removed = self.service.clear_movies()?;
        self.load()?;
        Ok(removed)
    }

    fn reject(&self, err: MovieValidationError) -> SubmitOutcome {
        debug!(
            "event=movie_submit module=screen status=rejected reason={}",
            err.code()
        );
        SubmitOutcome::Rejected(err)
    }
}
