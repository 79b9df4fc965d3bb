//! Validation for the `[api]` section.

use crate::schema::ScribeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ScribeConfig) {
    let api = &config.api;

    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }

    for (name, path) in [
        ("api.completion_path", &api.completion_path),
        ("api.save_chat_path", &api.save_chat_path),
    ] {
        if !path.starts_with('/') {
            errors.push(format!("{name} = {path:?} must start with '/'"));
        }
    }

    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        300,
    );
    if let Some(timeout) = api.request_timeout_secs {
        validate_range(errors, "api.request_timeout_secs", timeout, 1, 3600);
    }
}
