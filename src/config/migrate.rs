//! Configuration file maintenance: detect missing fields and back-fill them
//! with defaults, keeping whatever the user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields every complete config file carries.
const REQUIRED_KEYS: [&str; 4] = ["database", "default_board", "show_glyphs", "separator_char"];

/// Return the keys missing from the on-disk config file.
/// A missing file reports every key as missing.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(REQUIRED_KEYS.iter().map(|k| k.to_string()).collect());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in REQUIRED_KEYS {
            if !map.contains_key(Value::String(key.to_string())) {
                missing.push(key.to_string());
            }
        }
    } else {
        missing = REQUIRED_KEYS.iter().map(|k| k.to_string()).collect();
    }

    Ok(missing)
}

/// Report the config file state without changing it.
pub fn check_config(path: &Path) -> AppResult<()> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        for key in &missing {
            info(format!("Missing field: {}", key));
        }
        info("Run `surfsync config --migrate` to back-fill defaults.");
    }

    Ok(())
}

/// Back-fill missing fields with their defaults and rewrite the file.
/// Existing values are preserved (serde fills only the absent ones).
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(false);
    }

    // Loading goes through serde defaults, so the struct is complete even
    // when the file is not; saving writes the full set back.
    let cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str::<Config>(&content).map_err(|e| AppError::Config(e.to_string()))?
    } else {
        Config::default()
    };

    cfg.save().map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {} field(s): {}",
        missing.len(),
        missing.join(", ")
    ));

    Ok(true)
}
