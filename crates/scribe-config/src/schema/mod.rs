//! Configuration schema types for scribe.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod session;
mod system;

pub use api::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for scribe.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ScribeConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub palette: PaletteConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}
