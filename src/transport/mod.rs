//! HTTP transport port.
//!
//! Services fetch JSON through the [`Fetch`] trait so the same code runs in the
//! browser (`reqwasm`) and natively (`reqwest`, used by the desktop build and by
//! tests against a `mockito` server).

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeFetch;
#[cfg(target_arch = "wasm32")]
pub use web::WebFetch;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP client used by the application on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformFetch = WebFetch;
/// HTTP client used by the application on the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformFetch = NativeFetch;

/// Issues GET requests and decodes JSON bodies.
pub trait Fetch {
    /// Fetch `url` and decode the body as `T`.
    ///
    /// # Returns
    /// - `Ok(T)` - 2xx response with a body matching `T`
    /// - `Err(ApiError::Transport)` - The request could not be sent or the body not read
    /// - `Err(ApiError::Status)` - Non-2xx response
    /// - `Err(ApiError::Decode)` - The body is not valid JSON for `T`
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError>;
}

/// Decode a response body, attributing failures to `url`.
pub(crate) fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
