/// Browser-backed implementations of the storage, tab and HTTP seams

use crate::error::StorageError;
use crate::operations::{NoteRequest, NoteTransport};
use crate::storage::ConfigStore;
use crate::tab_data::{ActiveTab, TabSource};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

/// chrome.storage.local
pub struct ChromeStorage;

impl ConfigStore for ChromeStorage {
    async fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let value = getStorage(key)
            .await
            .map_err(|e| StorageError::Backend(js_error_message(&e)))?;

        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Backend(format!("Failed to parse storage: {}", e)))
    }

    async fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
        // Plain objects, not JS Maps, so chrome.storage can persist them
        let value = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        setStorage(key, value)
            .await
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }
}

/// chrome.tabs, current window
pub struct ChromeTabs;

impl TabSource for ChromeTabs {
    async fn active_tab(&self) -> Result<Option<ActiveTab>, String> {
        let tab_js = getActiveTab().await.map_err(|e| js_error_message(&e))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(tab_js)
            .map(Some)
            .map_err(|e| format!("Failed to parse tab: {}", e))
    }
}

/// window.fetch via gloo-net
pub struct FetchTransport;

impl NoteTransport for FetchTransport {
    async fn post(&self, request: &NoteRequest) -> Result<u16, String> {
        let mut builder = Request::post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .body(request.body.clone())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status())
    }
}

/// Best human-readable text for a rejected JS promise
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
