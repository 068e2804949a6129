//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer. The
//! booking core itself is stateless; only user preferences persist.

use anyhow::Result;

use crate::domain::models::preferences::UserPreferences;

/// Trait defining the interface for preference storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different backends (JSON files,
/// browser local storage, etc.) without modification.
pub trait PreferenceStorage: Send + Sync {
    /// Load the persisted preferences, or None if nothing was saved yet
    fn load_preferences(&self) -> Result<Option<UserPreferences>>;

    /// Persist the full preference set, replacing any previous state
    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()>;
}
