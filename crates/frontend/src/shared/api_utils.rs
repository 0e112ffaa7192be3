//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::FrontendConfig;
use contracts::domain::common::EntityId;
use serde::Serialize;
use std::sync::OnceLock;

static CONFIG: OnceLock<FrontendConfig> = OnceLock::new();

/// Active configuration, loaded on first use
pub fn config() -> &'static FrontendConfig {
    CONFIG.get_or_init(FrontendConfig::load)
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    config().api_base.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/districts");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// `{collection}/{id}` with the id percent-encoded as a single path segment
pub fn item_path(collection: &str, id: &EntityId) -> String {
    format!("/{}/{}", collection, urlencoding::encode(id.as_str()))
}

/// `{collection}?{query}`, query serialized with serde_qs
pub fn query_path<Q: Serialize>(collection: &str, query: &Q) -> Result<String, serde_qs::Error> {
    let qs = serde_qs::to_string(query)?;
    Ok(format!("/{}?{}", collection, qs))
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
