use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use super::connection::JsonConnection;
use crate::domain::models::preferences::UserPreferences;
use crate::storage::traits::PreferenceStorage;

const PREFERENCES_FILE: &str = "preferences.json";

/// JSON-file-backed implementation of [`PreferenceStorage`]
#[derive(Debug, Clone)]
pub struct PreferenceRepository {
    connection: JsonConnection,
}

impl PreferenceRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl PreferenceStorage for PreferenceRepository {
    fn load_preferences(&self) -> Result<Option<UserPreferences>> {
        let path = self.connection.file_path(PREFERENCES_FILE);
        if !path.exists() {
            debug!("No preferences file at {:?}", path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preferences from {:?}", path))?;
        let preferences = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences file {:?}", path))?;

        Ok(Some(preferences))
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        let path = self.connection.file_path(PREFERENCES_FILE);
        let contents = serde_json::to_string_pretty(preferences)?;

        // Write to a sibling temp file, then rename for an atomic replace
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write preferences to {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace preferences file {:?}", path))?;

        debug!("Saved preferences to {:?}", path);
        Ok(())
    }
}
