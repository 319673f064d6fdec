//! App Configuration
//!
//! Defaults reproduce the stock page. A page may override any field with a
//! JSON `<script type="application/json" id="todo-config">` element.

use serde::Deserialize;
use web_sys::Document;

/// Id of the optional config element
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local storage key holding the list
    pub storage_key: String,
    /// List heading
    pub title: String,
    /// Placeholder of the add input
    pub placeholder: String,
    pub add_label: String,
    pub delete_label: String,
    /// `log` level name: error, warn, info, debug, trace or off
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            title: "TODO List".to_string(),
            placeholder: "Задание".to_string(),
            add_label: "+".to_string(),
            delete_label: "🗑️".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("[CONFIG] Invalid #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.title, "TODO List");
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"title":"Groceries","log_level":"debug"}"#).unwrap();

        assert_eq!(config.title, "Groceries");
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig::from_json(r#"{"log_level":"loud"}"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(AppConfig::from_json("{title:").is_err());
    }
}
