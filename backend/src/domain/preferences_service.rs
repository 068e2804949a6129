//! User preference management: favorites, language, and display currency.
//!
//! Preferences are global app state rather than per-booking state, so they
//! live behind an injected storage abstraction instead of an ambient
//! global: loaded once when the service is constructed, saved on every
//! change.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::domain::models::preferences::UserPreferences;
use crate::storage::PreferenceStorage;

/// Service for managing user preferences over an injected store
#[derive(Clone)]
pub struct PreferencesService<S: PreferenceStorage> {
    repository: Arc<S>,
    preferences: Arc<Mutex<UserPreferences>>,
}

impl<S: PreferenceStorage> PreferencesService<S> {
    /// Create the service, loading persisted preferences if any exist
    pub fn new(repository: Arc<S>) -> Result<Self> {
        let preferences = repository.load_preferences()?.unwrap_or_default();
        info!(
            "Loaded preferences: {} favorites, language {}, currency {}",
            preferences.favorites.len(),
            preferences.language,
            preferences.currency
        );

        Ok(Self {
            repository,
            preferences: Arc::new(Mutex::new(preferences)),
        })
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.preferences.lock().unwrap().is_favorite(product_id)
    }

    pub fn favorites(&self) -> Vec<String> {
        self.preferences.lock().unwrap().favorites.clone()
    }

    /// Add or remove a product from favorites. Returns whether the product
    /// is a favorite after the toggle.
    pub fn toggle_favorite(&self, product_id: &str) -> Result<bool> {
        let snapshot = {
            let mut preferences = self.preferences.lock().unwrap();
            if preferences.is_favorite(product_id) {
                preferences.favorites.retain(|id| id != product_id);
            } else {
                preferences.favorites.push(product_id.to_string());
            }
            preferences.clone()
        };

        self.repository.save_preferences(&snapshot)?;
        Ok(snapshot.is_favorite(product_id))
    }

    pub fn language(&self) -> String {
        self.preferences.lock().unwrap().language.clone()
    }

    pub fn set_language(&self, language: &str) -> Result<()> {
        let snapshot = {
            let mut preferences = self.preferences.lock().unwrap();
            preferences.language = language.to_string();
            preferences.clone()
        };
        self.repository.save_preferences(&snapshot)?;
        info!("Language set to {}", language);
        Ok(())
    }

    pub fn currency(&self) -> String {
        self.preferences.lock().unwrap().currency.clone()
    }

    pub fn set_currency(&self, currency: &str) -> Result<()> {
        let snapshot = {
            let mut preferences = self.preferences.lock().unwrap();
            preferences.currency = currency.to_string();
            preferences.clone()
        };
        self.repository.save_preferences(&snapshot)?;
        info!("Display currency set to {}", currency);
        Ok(())
    }
}
