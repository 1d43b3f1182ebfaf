//! HTTP plumbing for the backend API.
//!
//! Thin wrappers over the browser Fetch API with timeout racing. All
//! requests go to the same origin the app was served from; the endpoint
//! helpers in [`crate::api::files`] build on these.

use js_sys::{Array, Promise};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::ApiError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Implements timeout behavior for any JavaScript Promise using
/// `Promise.race`. The timeout promise resolves to `undefined`, which no
/// fetch result can be, so the winner is unambiguous.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    // Race the promises
    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Functions
// =============================================================================

/// GET `url` and parse the JSON response.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;

    let response = send(&request).await?;
    let text = read_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

/// POST `body` to `url` as JSON and parse the JSON response.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload = serde_json::to_string(body).map_err(|_| ApiError::RequestCreationFailed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::RequestCreationFailed)?;

    let response = send(&request).await?;
    let text = read_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

/// POST `form` to `url` as multipart form data.
///
/// The browser sets the multipart boundary itself, so no Content-Type header
/// is attached here. The response body is discarded; a 2xx status is the
/// whole success signal.
pub async fn post_form(url: &str, form: &FormData) -> Result<(), ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(form);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;

    send(&request).await?;
    Ok(())
}

// =============================================================================
// Dispatch
// =============================================================================

/// Send `request`, racing it against [`FETCH_TIMEOUT_MS`].
///
/// Non-2xx statuses become [`ApiError::HttpError`]; the caller only ever
/// sees a response it can treat as success.
async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let fetch_promise = window.fetch_with_request(request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let response: Response = result.dyn_into().map_err(|_| ApiError::InvalidContent)?;

            if !response.ok() {
                return Err(ApiError::HttpError(response.status()));
            }

            Ok(response)
        }
    }
}

/// Read a response body as text.
async fn read_text(response: &Response) -> Result<String, ApiError> {
    let text = JsFuture::from(response.text().map_err(|_| ApiError::ResponseReadFailed)?)
        .await
        .map_err(|_| ApiError::ResponseReadFailed)?;

    text.as_string().ok_or(ApiError::InvalidContent)
}
