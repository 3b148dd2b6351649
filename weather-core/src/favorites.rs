//! Favorite cities, stored one per line in a plain text file.
//!
//! The file is append-only. Cities are listed in the order they were first
//! added, and a city is never written twice.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use tracing::{debug, info};

use crate::{config::Config, error::FavoritesError};

pub const FAVORITES_FILE_NAME: &str = "favorites.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(default_favorites_path()?))
    }

    /// Store at the configured `favorites_file`, else the default location.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.favorites_file {
            Some(path) => Ok(Self::new(path.clone())),
            None => Self::at_default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all favorites. A missing file means no favorites yet.
    pub fn load(&self) -> Result<Vec<String>, FavoritesError> {
        Ok(parse_lines(&self.read_raw()?))
    }

    pub fn list(&self) -> Result<Vec<String>, FavoritesError> {
        self.load()
    }

    /// Append `city` unless an identical entry already exists.
    ///
    /// Matching is exact: `"paris"` and `"Paris"` are different cities.
    pub fn add(&self, city: &str) -> Result<AddOutcome, FavoritesError> {
        if city.is_empty() || city.contains(['\n', '\r']) {
            return Err(FavoritesError::InvalidName(city.to_string()));
        }

        let raw = self.read_raw()?;
        if parse_lines(&raw).iter().any(|existing| existing == city) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let needs_separator = !raw.is_empty() && !raw.ends_with('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_separator {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{city}")?;

        info!(city, path = %self.path.display(), "added favorite");
        Ok(AddOutcome::Added)
    }

    /// File contents, or an empty string when the file does not exist yet.
    fn read_raw(&self) -> Result<String, FavoritesError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "favorites file not found");
                Ok(String::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// `favorites.txt` in the platform data directory.
pub fn default_favorites_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
        .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

    Ok(dirs.data_dir().join(FAVORITES_FILE_NAME))
}
