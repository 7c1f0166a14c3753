// std imports
use std::{env, path::PathBuf};

// local imports
use crate::{error::Result, settings::Settings};

// ---

pub const APP_NAME: &str = "globber";
pub const CONFIG_ENV: &str = "GLOBBER_CONFIG";

/// Loads settings from the user configuration file layered over the defaults.
pub fn load() -> Result<Settings> {
    Settings::load(path().as_deref())
}

/// Returns the user configuration file path.
///
/// `GLOBBER_CONFIG` takes precedence over `config.yaml` in the platform configuration directory.
pub fn path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(path.into()),
        _ => dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml")),
    }
}
