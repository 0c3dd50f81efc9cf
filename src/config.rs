use std::path::{Path, PathBuf};

use media_gallery::PhotoSource;
use serde::Deserialize;

use crate::error::AppError;

pub const CONFIG_FILE: &str = "kart-club.toml";
pub const API_URL_ENV: &str = "KART_CLUB_API_URL";
pub const ADMIN_ENV: &str = "KART_CLUB_ADMIN";

/// App settings: built-in defaults, then `kart-club.toml`, then environment
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClubConfig {
    pub api_url: String,
    pub database_path: PathBuf,
    /// Shows upload buttons and the race album form
    pub admin: bool,
    pub photo_source: PhotoSource,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            database_path: PathBuf::from("data/kart-club.db"),
            admin: false,
            photo_source: PhotoSource::default(),
        }
    }
}

impl ClubConfig {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads `path` if it exists; a missing file means defaults
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Applies overrides; `lookup` is `std::env::var` outside of tests
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(flag) = lookup(ADMIN_ENV) {
            self.admin = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        self
    }

    pub fn load() -> Self {
        let config = Self::from_file(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
            log::error!("Invalid {}: {}", CONFIG_FILE, e);
            Self::default()
        });
        config.with_overrides(|key| std::env::var(key).ok())
    }
}
