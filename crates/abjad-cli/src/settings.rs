//! User settings: default convention, normalization options and weights.
//!
//! Settings are stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/org.abjad.Abjad/
//! - Windows: %APPDATA%/abjad/Abjad/config/
//! - Linux: ~/.config/abjad/

use std::fs;
use std::path::{Path, PathBuf};

use abjad_model::{CompatibilityOptions, CompatibilityWeights, Convention, NormalizationOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "abjad";
const APP_NAME: &str = "Abjad";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub convention: Convention,
    pub normalization: NormalizationOptions,
    pub weights: CompatibilityWeights,
}

impl Settings {
    /// Compatibility options under `convention`, or the configured default.
    pub fn compatibility_options(&self, convention: Option<Convention>) -> CompatibilityOptions {
        CompatibilityOptions::new(convention.unwrap_or(self.convention))
            .with_weights(self.weights)
            .with_normalization(self.normalization)
    }
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from an explicit path. Any failure is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings = parse_settings(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load settings from the platform config folder.
///
/// Returns default settings if the file is missing, unreadable or invalid,
/// or if the platform-specific directory cannot be determined.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), "invalid settings file, using defaults: {error:#}");
                Settings::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), "failed to read settings file, using defaults: {error}");
            Settings::default()
        }
    }
}

/// Settings from `explicit` if given, otherwise from the config folder.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_from(path),
        None => Ok(load_settings()),
    }
}

/// Parse TOML settings and validate the weights.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content).context("invalid TOML")?;
    settings.weights.validate()?;
    Ok(settings)
}
