pub mod endpoints;

use wasm_bindgen::prelude::*;

use crate::config::Config;

/// Joins `endpoint` onto `base_url` with exactly one `/` between them.
///
/// One leading `/` is dropped from `endpoint` and one trailing `/` from
/// `base_url`; anything else in either string is kept as given. An empty
/// base produces a root-relative path for same-origin requests.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
    if base_url.is_empty() {
        return format!("/{}", endpoint);
    }

    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/{}", base_url, endpoint)
}

/// Request target for `endpoint` under the process-wide configuration.
pub fn api_url(endpoint: &str) -> String {
    Config::api().url(endpoint)
}

#[wasm_bindgen]
pub fn get_api_url(endpoint: &str) -> String {
    api_url(endpoint)
}

#[wasm_bindgen]
pub fn get_api_base_url() -> String {
    Config::api_base_url().to_string()
}
