//! Domain model for the movie shelf.
//!
//! # Responsibility
//! - Define the record shape shared by repository, screen and FFI layers.
//! - Own the write-boundary validation rules for form input.
//!
//! # Invariants
//! - Every stored movie is identified by a storage-assigned `MovieId`.
//! - Validation lives here, not in the storage engine.

pub mod movie;
