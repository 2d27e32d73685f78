//! Console configuration read from the hosting page

use contracts::domain::common::Qualifier;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Settings the server injects into the page as `window` globals
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Server context path, prepended to every URL (`window.baseUrl`)
    pub base_url: String,
    /// Root resource types of the instance (`window.topQualifiers`)
    pub top_qualifiers: Vec<Qualifier>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            top_qualifiers: vec![Qualifier::from("TRK")],
        }
    }
}

impl ConsoleConfig {
    pub fn from_window() -> Self {
        let mut config = Self::default();
        let Some(window) = web_sys::window() else {
            return config;
        };

        if let Some(base_url) = js_sys::Reflect::get(&window, &JsValue::from_str("baseUrl"))
            .ok()
            .and_then(|v| v.as_string())
        {
            config.base_url = base_url;
        }

        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str("topQualifiers")) {
            if js_sys::Array::is_array(&value) {
                let qualifiers: Vec<Qualifier> = js_sys::Array::from(&value)
                    .iter()
                    .filter_map(|v| v.as_string())
                    .map(Qualifier::from)
                    .collect();
                if !qualifiers.is_empty() {
                    config.top_qualifiers = qualifiers;
                }
            }
        }

        log::debug!(
            "console config: base_url='{}', top_qualifiers={:?}",
            config.base_url,
            config.top_qualifiers
        );
        config
    }
}

/// Config from context, or defaults when rendered outside `App`
pub fn use_console_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>().unwrap_or_default()
}
