//! scribe configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scribe_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.api.completion_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ScribeConfig, CONFIG_SCHEMA_VERSION};

use scribe_common::ConfigError;
use std::path::Path;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "SCRIBE_API_URL";
/// Environment variable overriding `session.user_id`.
pub const USER_ID_ENV: &str = "SCRIBE_USER_ID";

/// Load config from the platform default path, apply environment
/// overrides, and validate the result.
pub fn load_config() -> Result<ScribeConfig, ConfigError> {
    finish(toml_loader::load_default()?)
}

/// Like [`load_config`] but reads an explicit file.
pub fn load_config_from(path: &Path) -> Result<ScribeConfig, ConfigError> {
    finish(toml_loader::load_from_path(path)?)
}

fn finish(mut config: ScribeConfig) -> Result<ScribeConfig, ConfigError> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validation::validate(&config)?;
    Ok(config)
}

/// Apply overrides from a variable lookup (the process environment in
/// production). Blank values are ignored.
pub fn apply_env_overrides(config: &mut ScribeConfig, lookup: impl Fn(&str) -> Option<String>) {
    let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = present(API_URL_ENV) {
        tracing::debug!("api.base_url overridden by {API_URL_ENV}");
        config.api.base_url = url;
    }
    if let Some(user) = present(USER_ID_ENV) {
        config.session.user_id = Some(user);
    }
}
