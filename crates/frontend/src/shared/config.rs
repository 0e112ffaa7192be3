//! Frontend configuration
//!
//! Values are baked in at build time (`REGISTRY_API_BASE`, `REGISTRY_LOG_LEVEL`),
//! otherwise derived from the page location.

use std::str::FromStr;

/// Port the registry API listens on when no explicit base is configured
pub const DEFAULT_API_PORT: u16 = 8000;

const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl FrontendConfig {
    /// Load configuration for the running page
    pub fn load() -> Self {
        let api_base = resolve_api_base(option_env!("REGISTRY_API_BASE"), location_base());
        let log_level = parse_log_level(option_env!("REGISTRY_LOG_LEVEL"));
        Self {
            api_base,
            log_level,
        }
    }
}

fn location_base() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    if hostname.is_empty() {
        return None;
    }
    Some(format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT))
}

/// Explicit base wins, then the page location, then the local default.
/// Trailing slashes are dropped so paths can always start with `/`.
pub fn resolve_api_base(explicit: Option<&str>, from_location: Option<String>) -> String {
    let base = explicit
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or(from_location)
        .unwrap_or_else(|| FALLBACK_API_BASE.to_string());
    base.trim_end_matches('/').to_string()
}

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| log::Level::from_str(s.trim()).ok())
        .unwrap_or(log::Level::Debug)
}
