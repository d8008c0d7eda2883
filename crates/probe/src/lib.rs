// probe crate

use reqwest::blocking::Client;
use reqwest::header;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP error: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Blocking HTTP client that reports what status code a URL answers with.
///
/// Redirects are followed, so the returned code belongs to the final hop.
pub struct StatusProbe {
    client: Client,
}

impl StatusProbe {
    pub fn new(timeout_secs: u64) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(StatusProbe { client })
    }

    /// GET the URL and return the numeric status code
    pub fn status(&self, url: &str) -> Result<u16, ProbeError> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, "pagecheck-cli")
            .send()?;

        Ok(response.status().as_u16())
    }
}
