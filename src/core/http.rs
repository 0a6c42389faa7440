//! Single-shot JSON transport over a caller-replaceable `reqwest::Client`.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::PerplexityError;

/// Build the transport used when the caller does not inject one.
pub(crate) fn default_transport(user_agent: &str) -> Result<reqwest::Client, PerplexityError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| {
            PerplexityError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
        })
}

pub(crate) fn default_user_agent() -> String {
    format!("perplexity/{}", env!("CARGO_PKG_VERSION"))
}

/// Thin wrapper that performs exactly one POST per call.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn set_client(&mut self, client: reqwest::Client) {
        self.client = client;
    }

    /// POST `body` as JSON and decode the response body into `Res`.
    ///
    /// The timeout covers connecting, sending and reading the whole body.
    /// Nothing is retried: the first failure is returned to the caller.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url, timeout_ms = self.timeout.as_millis() as u64),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, PerplexityError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| PerplexityError::Parse {
            message: "Failed to serialize request body".to_string(),
            source: e,
        })?;

        let mut req_builder = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);

        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let response_text =
            match tokio::time::timeout(self.timeout, self.round_trip(req_builder)).await {
                Ok(result) => result?,
                Err(_) => {
                    warn!("HTTP request exceeded timeout");
                    return Err(PerplexityError::Timeout {
                        timeout: self.timeout,
                    });
                }
            };

        serde_json::from_str(&response_text).map_err(|e| PerplexityError::Parse {
            message: "Failed to parse API response".to_string(),
            source: e,
        })
    }

    async fn round_trip(
        &self,
        req_builder: reqwest::RequestBuilder,
    ) -> Result<String, PerplexityError> {
        let res = req_builder
            .send()
            .await
            .map_err(|e| self.transport_error(e, "Request failed"))?;

        let status = res.status();
        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PerplexityError::Api {
                message: format!("{status}: {error_text}"),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, "HTTP request successful");

        res.text()
            .await
            .map_err(|e| self.transport_error(e, "Failed to read response body"))
    }

    fn transport_error(&self, e: reqwest::Error, message: &str) -> PerplexityError {
        if e.is_timeout() {
            warn!(error = %e, "HTTP request timed out");
            PerplexityError::Timeout {
                timeout: self.timeout,
            }
        } else {
            warn!(error = %e, "HTTP request failed");
            PerplexityError::Network {
                message: message.to_string(),
                source: e,
            }
        }
    }
}
