//! Seam between the workflow and whatever performs the summarization.

use async_trait::async_trait;

use super::error::SummarizeError;
use super::request::SummarizeRequest;

/// Something that can turn a [`SummarizeRequest`] into summary text.
///
/// The workflow holds this as `Arc<dyn SummaryService>` so tests can swap
/// in a scripted fake and the UI can hand it to a runtime worker.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Returns the name of this service for logging.
    fn name(&self) -> &str;

    /// Perform one summarization call.
    ///
    /// Implementations must not retry; every failure is reported as-is.
    async fn summarize(&self, request: &SummarizeRequest) -> Result<String, SummarizeError>;
}
