//! The summarization request workflow.
//!
//! [`RequestWorkflow`] owns the input text, style, request state and history,
//! and reconciles them with the outcome of calls to a [`SummaryService`].
//! State only changes through [`SummarizeReducer`].
//!
//! A call can run in one step with [`RequestWorkflow::summarize`], or split
//! into [`RequestWorkflow::begin`] and [`RequestWorkflow::complete`] so the
//! terminal UI can keep drawing while the request is in flight.

use std::sync::Arc;

use crate::export::ExportFile;
use crate::service::{SummarizeError, SummarizeRequest, SummaryService, SummaryStyle};
use crate::ui::mvi::Reducer;
use crate::ui::summarize::{
    HistoryEntry, RequestState, SummarizeIntent, SummarizeReducer, WorkflowState,
};

pub struct RequestWorkflow {
    state: WorkflowState,
    service: Arc<dyn SummaryService>,
}

impl RequestWorkflow {
    pub fn new(service: Arc<dyn SummaryService>, style: SummaryStyle) -> Self {
        Self {
            state: WorkflowState::with_style(style),
            service,
        }
    }

    fn dispatch(&mut self, intent: SummarizeIntent) {
        self.state = SummarizeReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn input_text(&self) -> &str {
        &self.state.input
    }

    pub fn style(&self) -> SummaryStyle {
        self.state.style
    }

    pub fn request_state(&self) -> &RequestState {
        &self.state.request
    }

    /// Most recent first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.state.history
    }

    pub fn word_count(&self) -> usize {
        self.state.word_count()
    }

    pub fn service(&self) -> Arc<dyn SummaryService> {
        Arc::clone(&self.service)
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.dispatch(SummarizeIntent::InputChanged { text: text.into() });
    }

    pub fn set_style(&mut self, style: SummaryStyle) {
        self.dispatch(SummarizeIntent::StyleSelected { style });
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        self.dispatch(SummarizeIntent::AnimationTick);
    }

    /// Validate input and enter `Loading`.
    ///
    /// Returns the request to send, or `None` when the input was blank
    /// (state is now `Failed`) or a request is already in flight (state
    /// unchanged).
    pub fn begin(&mut self) -> Option<SummarizeRequest> {
        if self.state.request.is_loading() {
            tracing::debug!("Summarize ignored: request already in flight");
            return None;
        }

        self.dispatch(SummarizeIntent::Submit);

        if !self.state.request.is_loading() {
            tracing::debug!("Summarize rejected: input is empty");
            return None;
        }

        let request = SummarizeRequest::new(self.state.input.clone(), self.state.style);
        tracing::info!(
            style = %self.state.style,
            min_length = request.min_length,
            max_length = request.max_length,
            words = self.state.word_count(),
            "Summarize started"
        );
        Some(request)
    }

    /// Settle a request started by [`begin`](Self::begin).
    ///
    /// Ignored unless a request is in flight.
    pub fn complete(
        &mut self,
        request: SummarizeRequest,
        outcome: Result<String, SummarizeError>,
    ) {
        if !self.state.request.is_loading() {
            tracing::debug!(
                succeeded = outcome.is_ok(),
                "Dropping stale summarize completion"
            );
            return;
        }

        match outcome {
            Ok(summary) => {
                tracing::info!(summary_len = summary.len(), "Summarize finished");
                self.dispatch(SummarizeIntent::Succeeded {
                    input: request.text,
                    summary,
                });
            }
            Err(err) => {
                tracing::warn!(
                    service = self.service.name(),
                    error = %err,
                    "Summarize failed"
                );
                self.dispatch(SummarizeIntent::Failed {
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    /// Run one summarize call to completion.
    ///
    /// Never leaves the state in `Loading`.
    pub async fn summarize(&mut self) -> &RequestState {
        if let Some(request) = self.begin() {
            let outcome = self.service.summarize(&request).await;
            self.complete(request, outcome);
        }
        &self.state.request
    }

    /// The current summary as a `summary.txt` download, if there is one.
    pub fn export_file(&self) -> Option<ExportFile> {
        self.state.current_summary().map(ExportFile::summary)
    }
}
