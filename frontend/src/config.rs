use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use crate::utils::storage;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = storage::window().ok()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .and_then(|v| v.as_string())
            .and_then(|v| normalize_base_url(&v))
    })
}

// window.__RAKSHAK_ENV = { API_BASE_URL: "..." } written by env.js
fn get_from_env_js() -> Option<String> {
    read_global_key("__RAKSHAK_ENV", &["API_BASE_URL", "api_base_url"])
}

// window.__RAKSHAK_CONFIG = { api_base_url: "..." }
fn get_from_window_config() -> Option<String> {
    read_global_key("__RAKSHAK_CONFIG", &["api_base_url", "API_BASE_URL"])
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js().or_else(get_from_window_config)
}

/// Trims whitespace and trailing slashes; blank values count as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(url: &str) {
    let Ok(w) = storage::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__RAKSHAK_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = storage::window().ok()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|url| normalize_base_url(&url))
    {
        write_window_config(&url);
        return cache_base_url(&url);
    }
    log::warn!("No runtime API base URL configured, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}
