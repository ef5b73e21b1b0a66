//! Movie domain model and form-input validation.
//!
//! # Responsibility
//! - Define `MovieRecord`, the row shape read back from storage.
//! - Turn raw form text into a validated `MovieDraft`.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - A `MovieDraft` always has non-empty trimmed `title`/`genre` and `year > 0`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier of a movie row.
pub type MovieId = i64;

/// One persisted movie row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: i64,
    pub genre: String,
}

/// Validated input for a create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i64,
    pub genre: String,
}

/// Rule broken by raw form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieValidationError {
    EmptyTitle,
    EmptyGenre,
    /// Year text has no leading integer.
    InvalidYear,
    NonPositiveYear(i64),
}

impl Display for MovieValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::EmptyGenre => write!(f, "genre cannot be empty"),
            Self::InvalidYear => write!(f, "year must be an integer"),
            Self::NonPositiveYear(year) => write!(f, "year must be positive, got {year}"),
        }
    }
}

impl Error for MovieValidationError {}

impl MovieValidationError {
    /// Stable machine-readable code used in log lines and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::EmptyGenre => "empty_genre",
            Self::InvalidYear => "invalid_year",
            Self::NonPositiveYear(_) => "non_positive_year",
        }
    }
}

impl MovieDraft {
    /// Trims and validates raw form text.
    ///
    /// Checks run in form order: title, year, genre.
    pub fn parse(title: &str, year: &str, genre: &str) -> Result<Self, MovieValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MovieValidationError::EmptyTitle);
        }

        let year = parse_year(year).ok_or(MovieValidationError::InvalidYear)?;
        if year <= 0 {
            return Err(MovieValidationError::NonPositiveYear(year));
        }

        let genre = genre.trim();
        if genre.is_empty() {
            return Err(MovieValidationError::EmptyGenre);
        }

        Ok(Self {
            title: title.to_string(),
            year,
            genre: genre.to_string(),
        })
    }
}

/// Parses the leading integer of `text`.
///
/// Accepts surrounding whitespace, an optional sign and stops at the first
/// non-digit, so `"1999 remaster"` yields `1999`. A `0x`/`0X` prefix switches
/// to hexadecimal (`"0x7D1"` yields `2001`). Returns `None` when no digit
/// follows the prefix or the value overflows `i64`.
pub fn parse_year(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let end = digits
        .find(|ch: char| !ch.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
