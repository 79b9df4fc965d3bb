//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod api;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::ScribeConfig;
use scribe_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ScribeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    misc::validate_palette(&mut errors, config);
    misc::validate_notifications(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
