//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# scribe configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
base_url = "http://localhost:8000"   # overridden by SCRIBE_API_URL
# completion_path = "/api/create_chat_stream"
# save_chat_path = "/api/save_chat"
# connect_timeout_secs = 10          # 1-300
# request_timeout_secs = 120         # 1-3600, unset = wait indefinitely

[session]
# session_id = "fixed-session-id"    # default: fresh UUID per run
# user_id = "user-123"               # overridden by SCRIBE_USER_ID

[palette]
# continue_context_chars = 5000      # 1-100000

[notifications]
# capacity = 16                      # 1-256

[logging]
level = "INFO"                       # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
