//! Flutter-facing bindings for the movie shelf core.

pub mod api;
