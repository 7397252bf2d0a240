//! Runtime Configuration
//!
//! Resolves the base path the reverse proxy injects on `window`, once per
//! page load, and derives the API base from it.

use std::sync::OnceLock;

use wasm_bindgen::JsValue;

/// Global the proxy sets on `window` when serving under a sub-path
const BASE_PATH_GLOBAL: &str = "APP_BASE_PATH";

static BASE_PATH: OnceLock<String> = OnceLock::new();
static API_BASE: OnceLock<String> = OnceLock::new();

/// Proxy-injected base path; empty when served at the root
pub fn base_path() -> &'static str {
    BASE_PATH.get_or_init(injected_base_path)
}

/// Base URL for all API calls, resolved once per page load
pub fn api_base() -> &'static str {
    API_BASE.get_or_init(|| join_api_base(base_path()))
}

fn injected_base_path() -> String {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str(BASE_PATH_GLOBAL)).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

fn join_api_base(base_path: &str) -> String {
    format!("{}/api", base_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_api_base_defaults_to_root_relative() {
        assert_eq!(join_api_base(""), "/api");
    }

    #[test]
    fn test_join_api_base_honors_proxy_prefix() {
        assert_eq!(join_api_base("/apps/todo"), "/apps/todo/api");
    }
}
