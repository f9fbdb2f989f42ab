#![cfg(target_arch = "wasm32")]

use insights_frontend::api::{get_api_base_url, get_api_url};
use insights_frontend::config::get_api_config;
use insights_frontend::endpoints::chat_url;
use insights_frontend::{join_url, Config};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn exported_urls_follow_build_config() {
    let base = Config::api_base_url();
    assert_eq!(get_api_base_url(), base);
    assert_eq!(get_api_url("/chat"), join_url(base, "chat"));
    assert_eq!(chat_url(), get_api_url("chat"));
}

#[wasm_bindgen_test]
fn exported_config_is_json() {
    let json = get_api_config();
    assert!(json.starts_with('{'));
    assert!(json.contains("\"mode\""));
}
