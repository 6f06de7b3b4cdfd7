/// Application configuration
///
/// The catalog API and the media host are read from a small JSON file in
/// the user's config directory, so the app can be pointed at another
/// backend without rebuilding. A missing or unreadable file falls back
/// to the development defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default collection endpoint (trailing slash included)
const DEFAULT_API_URL: &str = "http://localhost:8000/basic/";
/// Default host serving uploaded cover images
const DEFAULT_MEDIA_URL: &str = "http://localhost:8000";

/// Endpoints the application talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the book collection endpoint
    pub api_url: String,
    /// Host that serves `/media/...` cover paths
    pub media_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            media_url: DEFAULT_MEDIA_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load the configuration, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        "invalid config file, using defaults: {}", e
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Where the config file is looked up:
    /// - Linux: ~/.config/book-shelf/config.json
    /// - macOS: ~/Library/Application Support/book-shelf/config.json
    /// - Windows: %APPDATA%\book-shelf\config.json
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user config directory");

        path.push("book-shelf");
        path.push("config.json");
        path
    }
}
