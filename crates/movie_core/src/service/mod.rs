//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Hold the form/list view state so UI layers stay thin bindings.

pub mod movie_screen;
pub mod movie_service;
