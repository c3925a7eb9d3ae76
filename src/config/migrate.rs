//! Configuration file checks: detect keys missing from an older file and
//! rewrite it with their default values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("cannot serialize defaults: {e}")))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("defaults are not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config("configuration root is not a mapping".into())),
        Err(e) => Err(AppError::Config(e.to_string())),
    }
}

/// Keys present in the defaults but absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let defaults = defaults_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing keys with their defaults. Existing values are kept as they are.
pub fn complete_with_defaults(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut current = parse_mapping(content)?;
    let defaults = defaults_mapping()?;

    let mut added = Vec::new();
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::Config(e.to_string()))?;
    Ok((yaml, added))
}

/// `config --check`
pub fn check_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        info(format!("Missing keys: {}", missing.join(", ")));
    }
    Ok(missing)
}

/// `config --migrate`
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let (yaml, added) = complete_with_defaults(&content)?;

    if added.is_empty() {
        info("Configuration already up to date.");
        return Ok(added);
    }

    fs::write(path, yaml)?;
    success(format!("Configuration migrated, added: {}", added.join(", ")));
    Ok(added)
}
