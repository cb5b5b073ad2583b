//! API base-URL resolution.
//!
//! The SSR host writes its configured backend origin into a
//! `<meta name="api-base-url">` tag; the browser reads it back during
//! hydration. Outside the browser the `API_BASE_URL` environment variable is
//! consulted instead, then the compile-time value, then the local default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `name` attribute of the shell meta tag carrying the backend origin.
pub const API_BASE_META_NAME: &str = "api-base-url";

/// Path prefix every REST endpoint lives under.
pub const API_PREFIX: &str = "/api/v1";

/// Resolved backend location, provided to views through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config from an origin, trimming trailing slashes.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: trim_base_url(base_url) }
    }

    /// Resolve from the runtime source, then the compile-time value, then the default.
    pub fn resolve() -> Self {
        Self::new(&choose_base_url(runtime_base_url(), option_env!("API_BASE_URL")))
    }

    /// Backend origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root every endpoint path is appended to.
    pub fn api_root(&self) -> String {
        format!("{}{API_PREFIX}", self.base_url)
    }
}

fn trim_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn choose_base_url(runtime: Option<String>, compiled: Option<&str>) -> String {
    runtime
        .filter(|v| !v.trim().is_empty())
        .or_else(|| compiled.filter(|v| !v.trim().is_empty()).map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

#[cfg(feature = "hydrate")]
fn runtime_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
}

#[cfg(not(feature = "hydrate"))]
fn runtime_base_url() -> Option<String> {
    std::env::var("API_BASE_URL").ok()
}
