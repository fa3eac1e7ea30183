//! REST Countries client.
//!
//! Wraps `GET {base}/name/{term}`. The API is stateless and keyed by the
//! path segment alone, so every call is an independent round trip.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use super::source::{CountrySource, QueryError};
use super::types::{CountryRecord, decode_countries};
use crate::core::config::ResolvedConfig;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

pub struct CountryQueryService {
    base_url: Url,
    client: reqwest::Client,
}

impl CountryQueryService {
    /// Creates a service around an existing client. `base_url` defaults to
    /// [`DEFAULT_BASE_URL`].
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Result<Self, QueryError> {
        let raw = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw)
            .map_err(|e| QueryError::Config(format!("invalid base URL {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(QueryError::Config(format!("base URL {raw:?} cannot take a path")));
        }

        Ok(Self { base_url, client })
    }

    /// Builds a client honoring the configured timeout.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, QueryError> {
        let client = build_client(config.timeout)?;
        Self::new(client, Some(config.base_url.clone()))
    }

    /// `{base}/name/{term}` with `term` percent-encoded as one path segment.
    ///
    /// `.` and `..` cannot be carried as a segment (URL parsing folds them,
    /// escaped or not), so they are rejected instead of hitting another path.
    pub fn endpoint(&self, term: &str) -> Result<Url, QueryError> {
        if matches!(term, "." | "..") {
            return Err(QueryError::Request(format!(
                "{term:?} is not a valid path segment"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| QueryError::Config(format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push("name")
            .push(term);
        Ok(url)
    }
}

fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, QueryError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| QueryError::Config(format!("failed to build HTTP client: {e}")))
}

#[async_trait]
impl CountrySource for CountryQueryService {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, QueryError> {
        let url = self.endpoint(term)?;
        info!("REST Countries request: GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        debug!("REST Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("REST Countries API error: {} - {}", status, err_body);
            return Err(QueryError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let countries = decode_countries(&body).map_err(|e| {
            warn!("Failed to decode {} byte response: {}", body.len(), e);
            QueryError::from(e)
        })?;

        info!("Decoded {} countries for {:?}", countries.len(), term);
        Ok(countries)
    }
}
