//! Color provider client
//!
//! One synchronous call against thecolorapi.com (or a configured stand-in):
//! `GET {base_url}/random`. The provider wraps every field in an object with
//! a `value` member; only the color name and hex code are kept.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ServiceError;

/// A color as returned to our callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomColor {
    pub name: String,
    pub hex: String,
}

/// Provider response shape
#[derive(Deserialize)]
struct ProviderColor {
    name: ValueField,
    hex: ValueField,
}

#[derive(Deserialize)]
struct ValueField {
    value: String,
}

/// Client for the external color service
#[derive(Debug, Clone)]
pub struct ColorClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ColorClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetch one random color.
    ///
    /// Transport failures, timeouts, and non-success statuses surface as
    /// `ProviderUnavailable`; a response that decodes to the wrong shape is
    /// `ProviderMalformed`. Neither is retried.
    pub async fn random_color(&self) -> Result<RandomColor, ServiceError> {
        let url = format!("{}/random", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ServiceError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::ProviderUnavailable(format!(
                "provider returned HTTP {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::ProviderUnavailable(e.to_string()))?;

        parse_color(&body)
    }
}

/// Decode the provider body into a color
fn parse_color(body: &[u8]) -> Result<RandomColor, ServiceError> {
    let color: ProviderColor = serde_json::from_slice(body)
        .map_err(|e| ServiceError::ProviderMalformed(e.to_string()))?;

    Ok(RandomColor {
        name: color.name.value,
        hex: color.hex.value,
    })
}
