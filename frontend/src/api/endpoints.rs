//! Paths served by the insights backend.

use wasm_bindgen::prelude::*;

use super::api_url;

/// Landing page.
pub const INDEX: &str = "/";
/// Insights dashboard page.
pub const INSIGHTS: &str = "/insights";
/// Assistant chat API. Takes a `POST` with a JSON message body.
pub const CHAT: &str = "/chat";

#[wasm_bindgen]
pub fn chat_url() -> String {
    api_url(CHAT)
}

#[wasm_bindgen]
pub fn insights_url() -> String {
    api_url(INSIGHTS)
}
