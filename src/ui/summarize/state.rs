//! State owned by the summarization workflow.

use crate::service::SummaryStyle;
use crate::ui::mvi::UiState;

/// Progress of the most recent summarize call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading {
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// The service returned a summary.
    Succeeded { summary: String },

    /// Validation or transport failed.
    Failed { message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Succeeded { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// One successful summarization, kept for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    pub summary: String,
}

/// Everything the workflow owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub input: String,
    pub style: SummaryStyle,
    pub request: RequestState,
    /// Most recent first.
    pub history: Vec<HistoryEntry>,
}

impl UiState for WorkflowState {}

impl WorkflowState {
    pub fn with_style(style: SummaryStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Number of whitespace-separated words in the input.
    pub fn word_count(&self) -> usize {
        word_count(&self.input)
    }

    /// Summary of the last call, if it succeeded.
    pub fn current_summary(&self) -> Option<&str> {
        self.request.summary()
    }
}

/// Count whitespace-separated tokens; blank text has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
