//! Persistent storage for the selected location
//!
//! A single JSON file holds the one active location. Absence or a corrupt
//! file both resolve to the default location, so reads never fail.

use crate::Result;
use crate::models::Location;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed store for the single active location
#[derive(Debug, Clone)]
pub struct LocationStore {
    path: PathBuf,
}

impl LocationStore {
    /// Create a store backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store path under the platform config directory
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weatherdash")
            .join("location.json")
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored location. Missing or unparseable data falls back to
    /// the default location; this never fails.
    #[must_use]
    pub fn get(&self) -> Location {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(location) => location,
                Err(e) => {
                    warn!(
                        "Stored location at {} is unparseable ({}), using default",
                        self.path.display(),
                        e
                    );
                    Location::default()
                }
            },
            Err(e) => {
                debug!(
                    "No stored location at {} ({}), using default",
                    self.path.display(),
                    e
                );
                Location::default()
            }
        }
    }

    /// Serialize and write the location, fully replacing any prior value
    pub fn set(&self, location: &Location) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(location)
            .map_err(|e| crate::WeatherdashError::parse(e.to_string()))?;
        fs::write(&self.path, json)?;
        debug!("Saved location '{}' to {}", location.name, self.path.display());
        Ok(())
    }
}
