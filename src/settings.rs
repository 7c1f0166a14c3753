// std imports
use std::{include_str, path::Path};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Runes that `*` and `?` never match.
    pub separators: String,
    pub invert_match: bool,
}

impl Settings {
    /// Loads embedded defaults, overridden by the file at `path` if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = path {
            log::debug!("loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Returns the embedded defaults.
    pub fn defaults() -> Result<Self> {
        Self::load(None)
    }
}
