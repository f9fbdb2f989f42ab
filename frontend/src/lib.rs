//! API URL resolution for the insights web frontend.
//!
//! The API base URL is read once from [`API_BASE_URL_VARS`]. With nothing
//! configured, requests go to the origin that served the page, so
//! [`api_url`] produces root-relative paths.

pub mod api;
pub mod config;

pub use api::endpoints;
pub use api::{api_url, join_url};
#[cfg(not(target_arch = "wasm32"))]
pub use config::ProcessEnv;
pub use config::{
    ApiConfig, ApiMode, BuildEnv, Config, EnvSource, Layered, API_BASE_URL_VARS,
};

// Add a start function that Trunk can call
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    log::info!("Logger and panic hook initialized");

    let api = Config::api();
    log::info!(
        "API requests use {:?} mode (base: {:?})",
        api.mode(),
        api.base_url()
    );

    Ok(())
}
