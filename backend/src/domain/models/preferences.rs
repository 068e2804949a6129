use serde::{Deserialize, Serialize};

/// User-level preferences shared across the whole app: favorite products,
/// UI language, and display currency. Persisted through the preference
/// storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// IDs of favorited products
    pub favorites: Vec<String>,
    /// BCP 47 language tag, e.g. "en"
    pub language: String,
    /// ISO 4217 currency code used for display
    pub currency: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            language: "en".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl UserPreferences {
    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.iter().any(|id| id == product_id)
    }
}
