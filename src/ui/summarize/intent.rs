//! Intents for the summarization workflow.

use crate::service::SummaryStyle;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummarizeIntent {
    /// Input text replaced (every edit).
    InputChanged { text: String },

    /// User picked a style.
    StyleSelected { style: SummaryStyle },

    /// User asked for a summary.
    Submit,

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// The service returned a summary for `input`.
    Succeeded {
        /// Text that was submitted, not the current input.
        input: String,
        summary: String,
    },

    /// The call failed.
    Failed { message: String },
}

impl Intent for SummarizeIntent {}
