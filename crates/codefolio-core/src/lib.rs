//! Core domain types and configuration for codefolio.

pub mod app_config;
pub mod config;
pub mod extract;
pub mod platform;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use extract::{extract_username, ExtractError};
pub use platform::{Platform, PlatformKind, UnknownPlatform};

/// Raw, platform-specific response tree as returned by a fetch adapter.
///
/// Treated as an opaque tree of named fields; any leaf may be absent.
pub type RawPayload = serde_json::Value;
