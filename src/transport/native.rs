use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    transport::{decode_body, Fetch},
};

/// `reqwest`-backed transport for native targets.
#[derive(Clone, Debug, Default)]
pub struct NativeFetch {
    client: reqwest::Client,
}

impl NativeFetch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetch for NativeFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let transport_error = |e: reqwest::Error| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport_error)?;

        decode_body(url, &body)
    }
}
