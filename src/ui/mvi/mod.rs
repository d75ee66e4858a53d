//! Model-View-Intent (MVI) primitives.
//!
//! Workflow state only moves forward through a reducer:
//!
//! ```text
//! edit / key / reply ─→ Intent ─→ Reducer ─→ WorkflowState ─→ render
//! ```
//!
//! Reducers never touch the network or the terminal, so every transition
//! is testable as a plain function call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
