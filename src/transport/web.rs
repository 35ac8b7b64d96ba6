use dioxus_logger::tracing;
use reqwasm::http::Request;
use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    transport::{decode_body, Fetch},
};

/// Browser `fetch` transport.
#[derive(Clone, Debug, Default)]
pub struct WebFetch;

impl WebFetch {
    pub fn new() -> Self {
        Self
    }
}

impl Fetch for WebFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.ok() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        decode_body(url, &body)
    }
}
