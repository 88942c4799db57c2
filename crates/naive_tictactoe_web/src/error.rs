//! Browser host error types.

use derive_more::{Display, Error};
use wasm_bindgen::JsValue;

/// Failure talking to the DOM, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Web error: {} at {}:{}", message, file, line)]
pub struct WebError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WebError {
    /// Creates a new web error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<JsValue> for WebError {
    #[track_caller]
    fn from(value: JsValue) -> Self {
        Self::new(format!("JavaScript exception: {:?}", value))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
