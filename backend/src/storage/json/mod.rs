//! # JSON Storage Module
//!
//! File-based preference storage using JSON. This plays the role the
//! browser's local storage plays in the hosted app: a small key-value
//! persistence layer for user preferences, with no schema migrations and
//! atomic whole-file writes.

pub mod connection;
pub mod preference_repository;

pub use connection::JsonConnection;
pub use preference_repository::PreferenceRepository;
