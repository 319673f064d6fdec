//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the persisted key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to encode todos: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Failures while starting or mounting the app
#[derive(Debug, Error)]
pub enum AppError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document has no body")]
    NoBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(js_message(&value))
    }
}

/// Readable text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
