use std::collections::HashMap;

use log::{debug, error, info};
use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::join_url;

/// Variables consulted for the API base URL, highest priority first.
///
/// `NEXT_PUBLIC_API_BASE_URL` is the older name and is still honored so
/// existing deployment scripts keep working.
// Keep in sync with the `option_env!` match in `BuildEnv::var`.
pub const API_BASE_URL_VARS: [&str; 2] = ["VITE_API_BASE_URL", "NEXT_PUBLIC_API_BASE_URL"];

static API_CONFIG: Lazy<ApiConfig> = Lazy::new(|| ApiConfig::from_source(&DefaultEnv::default()));

/// Named string lookup that configuration is resolved from.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Values captured at compile time.
///
/// The browser has no process environment, so the bundler passes the
/// variables to `cargo build` and they are baked into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildEnv;

impl EnvSource for BuildEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = match name {
            "VITE_API_BASE_URL" => option_env!("VITE_API_BASE_URL"),
            "NEXT_PUBLIC_API_BASE_URL" => option_env!("NEXT_PUBLIC_API_BASE_URL"),
            _ => None,
        };
        value.map(str::to_string)
    }
}

/// The environment of the running process.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

#[cfg(not(target_arch = "wasm32"))]
impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Looks a variable up in the first source, and in the second when the
/// first has it unset or empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layered<P, F>(pub P, pub F);

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn var(&self, name: &str) -> Option<String> {
        self.0
            .var(name)
            .filter(|value| !value.is_empty())
            .or_else(|| self.1.var(name))
    }
}

#[cfg(target_arch = "wasm32")]
type DefaultEnv = BuildEnv;

#[cfg(not(target_arch = "wasm32"))]
type DefaultEnv = Layered<ProcessEnv, BuildEnv>;

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Where API requests are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiMode {
    /// Root-relative paths against whatever origin served the page.
    SameOrigin,
    /// Absolute URLs under a configured base.
    Remote,
}

/// Resolved API target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    base_url: String,
    source: Option<&'static str>,
    mode: ApiMode,
}

impl ApiConfig {
    /// Resolves the base URL from `env`.
    ///
    /// The first variable in [`API_BASE_URL_VARS`] holding a non-empty value
    /// wins. Values are taken verbatim. With nothing set the result is
    /// same-origin, which is a normal deployment and not an error.
    pub fn from_source<E: EnvSource + ?Sized>(env: &E) -> Self {
        for name in API_BASE_URL_VARS {
            match env.var(name) {
                Some(value) if !value.is_empty() => {
                    info!("Using API base URL from {}: {}", name, value);
                    return Self::new(value, Some(name));
                }
                Some(_) => debug!("{} is set but empty, skipping", name),
                None => {}
            }
        }

        info!("No API base URL configured, using same-origin relative paths");
        Self::same_origin()
    }

    pub fn same_origin() -> Self {
        Self::new(String::new(), None)
    }

    /// Explicit base URL. An empty string selects same-origin mode.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(base_url.into(), None)
    }

    fn new(base_url: String, source: Option<&'static str>) -> Self {
        let mode = if base_url.is_empty() {
            ApiMode::SameOrigin
        } else {
            ApiMode::Remote
        };
        Self {
            base_url,
            source,
            mode,
        }
    }

    /// The configured base, empty in same-origin mode.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Variable the base URL was read from, if any.
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    pub fn is_same_origin(&self) -> bool {
        self.mode == ApiMode::SameOrigin
    }

    /// Full request target for `endpoint` under this configuration.
    pub fn url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            error!("Failed to serialize API configuration: {}", e);
            "{}".to_string()
        })
    }
}

pub struct Config;

impl Config {
    /// Process-wide API configuration, resolved on first access and never
    /// re-read afterwards.
    pub fn api() -> &'static ApiConfig {
        &API_CONFIG
    }

    pub fn api_base_url() -> &'static str {
        Self::api().base_url()
    }
}

/// Returns the resolved API configuration as JSON
#[wasm_bindgen]
pub fn get_api_config() -> String {
    Config::api().to_json()
}
