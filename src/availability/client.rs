// SPDX-License-Identifier: MPL-2.0
//! Transport for the availability check.

use super::query::{AvailabilityQuery, AvailabilityResult, CsrfToken};
use crate::error::TransportError;
use std::future::Future;
use std::time::Duration;

/// Endpoint answering availability checks with JSON.
pub const AVAILABILITY_ENDPOINT: &str = "/search-availability-json";

/// One availability round trip.
pub trait AvailabilityApi: Send + Sync + 'static {
    fn search(
        &self,
        query: &AvailabilityQuery,
        csrf_token: &CsrfToken,
    ) -> impl Future<Output = Result<AvailabilityResult, TransportError>> + Send;
}

/// `reqwest`-backed client for the bookings server.
#[derive(Debug, Clone)]
pub struct HttpAvailabilityApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAvailabilityApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::from)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of the availability endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        resolve_url(&self.base_url, AVAILABILITY_ENDPOINT)
    }
}

impl AvailabilityApi for HttpAvailabilityApi {
    async fn search(
        &self,
        query: &AvailabilityQuery,
        csrf_token: &CsrfToken,
    ) -> Result<AvailabilityResult, TransportError> {
        let url = self.endpoint();
        tracing::debug!(%url, room_id = %query.room_id, "posting availability query");

        let response = self
            .client
            .post(&url)
            .form(&query.form_fields(csrf_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let result: AvailabilityResult = serde_json::from_str(&body)?;
        tracing::debug!(ok = result.ok, "availability response decoded");
        Ok(result)
    }
}

/// Joins a site-relative path onto a base URL without doubling slashes.
#[must_use]
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
