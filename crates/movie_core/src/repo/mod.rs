//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from screen/service orchestration.
//!
//! # Invariants
//! - Repositories store what they are given; input validation happens at
//!   the form boundary before a write is issued.
//! - Missing ids on update/delete are reported as "nothing changed", never
//!   as errors.

pub mod movie_repo;
