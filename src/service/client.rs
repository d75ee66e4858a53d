//! HTTP client for the summarization service.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ServiceConfig;

use super::error::SummarizeError;
use super::request::{SummarizeRequest, SummarizeResponse};
use super::traits::SummaryService;

/// Path of the summarization endpoint relative to the base URL.
const SUMMARIZE_PATH: &str = "/summarize";

/// Client for `POST {base_url}/summarize`.
///
/// Timeouts are owned here, not by the workflow: a request that exceeds
/// `timeout_seconds` surfaces as [`SummarizeError::Transport`].
pub struct HttpSummaryClient {
    client: Client,
    endpoint: String,
}

impl HttpSummaryClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryService for HttpSummaryClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<String, SummarizeError> {
        tracing::debug!(
            url = %self.endpoint,
            min_length = request.min_length,
            max_length = request.max_length,
            text_len = request.text.len(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %body,
                "Summarization service error"
            );

            return Err(SummarizeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let summary = parse_response(&bytes)?;

        tracing::info!(
            status = %status,
            latency_ms,
            summary_len = summary.len(),
            "Summarization succeeded"
        );

        Ok(summary)
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUMMARIZE_PATH)
}

/// Validate the body against `{"summary": string}`.
fn parse_response(body: &[u8]) -> Result<String, SummarizeError> {
    let parsed: SummarizeResponse = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejecting summarization response");
        SummarizeError::MalformedResponse(e.to_string())
    })?;
    Ok(parsed.summary)
}
