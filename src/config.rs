// src/config.rs

//! Configuration loading utilities.
//!
//! The launcher takes no flags of its own, so everything it can be told
//! comes from the environment: an optional TOML file plus a couple of
//! single-value overrides.

use std::env;
use std::path::Path;

use crate::models::{Config, ForwardMode};

/// Path of an optional TOML configuration file.
pub const CONFIG_ENV: &str = "ARCHIVE_SHIM_CONFIG";

/// Overrides `runtime.interpreter`.
pub const PYTHON_ENV: &str = "ARCHIVE_SHIM_PYTHON";

/// Overrides `forward.mode` (`joined` or `split`).
pub const FORWARD_ENV: &str = "ARCHIVE_SHIM_FORWARD";

/// Load configuration from the process environment.
pub fn load_from_env() -> Config {
    load_with(|key| env::var(key).ok())
}

/// Load configuration using `lookup` to read environment variables.
///
/// Falls back to defaults if the file is missing or invalid.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Config {
    let mut config = match lookup(CONFIG_ENV).filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            log::debug!("Loading config from {}", path);
            Config::load_or_default(Path::new(&path))
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &lookup);
    config
}

/// Apply single-value environment overrides on top of a loaded config.
fn apply_overrides(config: &mut Config, lookup: &impl Fn(&str) -> Option<String>) {
    if let Some(python) = lookup(PYTHON_ENV).filter(|v| !v.trim().is_empty()) {
        log::debug!("Interpreter overridden by {}: {}", PYTHON_ENV, python);
        config.runtime.interpreter = python;
    }

    if let Some(mode) = lookup(FORWARD_ENV) {
        match mode.parse::<ForwardMode>() {
            Ok(mode) => config.forward.mode = mode,
            Err(e) => log::warn!("Ignoring {}: {}", FORWARD_ENV, e),
        }
    }
}
