//! HTTP Plumbing
//!
//! Shared fetch helper for the task API bindings.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Default base path for the task resource.
const DEFAULT_API_BASE: &str = "/api/tasks";

/// Errors surfaced by the task API bindings
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request body could not be encoded.
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// The request never reached the server (network down, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Resolve the API base URL. Pages can override the compiled-in default by
/// setting `window.TASK_API_BASE` before the app boots.
fn api_base() -> String {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("TASK_API_BASE")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Issue a request against the task resource and check the status.
///
/// `path` is appended to the base URL; bodies are sent as JSON.
pub(super) async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = &body {
        opts.set_body(&JsValue::from_str(json));
    }

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Issue a request and decode the JSON response body.
pub(super) async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let response = send(method, path, body).await?;
    let promise = response.json().map_err(|e| ApiError::Decode(js_error_message(&e)))?;
    let json = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error_message(&e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}
