//! Validation for the smaller sections: palette and notifications.

use crate::schema::ScribeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &ScribeConfig) {
    validate_range(
        errors,
        "palette.continue_context_chars",
        config.palette.continue_context_chars as u64,
        1,
        100_000,
    );
}

pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &ScribeConfig) {
    validate_range(
        errors,
        "notifications.capacity",
        u64::from(config.notifications.capacity),
        1,
        256,
    );
}
