//! Summarization workflow feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Input, style, request progress and history
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SummarizeIntent;
pub use reducer::SummarizeReducer;
pub use state::{word_count, HistoryEntry, RequestState, WorkflowState};
pub use view::{render_history, render_result, INPUT_PREVIEW_CHARS};
