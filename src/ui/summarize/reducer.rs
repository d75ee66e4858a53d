//! Reducer for the summarization workflow.

use crate::service::SummarizeError;
use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::state::{HistoryEntry, RequestState, WorkflowState};

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = WorkflowState;
    type Intent = SummarizeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummarizeIntent::InputChanged { text } => WorkflowState {
                input: text,
                ..state
            },

            SummarizeIntent::StyleSelected { style } => WorkflowState { style, ..state },

            SummarizeIntent::Submit => {
                // One request at a time; a second submit while loading is dropped.
                if state.request.is_loading() {
                    return state;
                }

                let request = if state.input.trim().is_empty() {
                    RequestState::Failed {
                        message: SummarizeError::EmptyInput.user_message().to_string(),
                    }
                } else {
                    RequestState::Loading { animation_tick: 0 }
                };
                WorkflowState { request, ..state }
            }

            SummarizeIntent::AnimationTick => match state.request {
                RequestState::Loading { animation_tick } => WorkflowState {
                    request: RequestState::Loading {
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    ..state
                },
                _ => state,
            },

            SummarizeIntent::Succeeded { input, summary } => {
                if !state.request.is_loading() {
                    return state;
                }

                let mut history = state.history;
                history.insert(
                    0,
                    HistoryEntry {
                        input,
                        summary: summary.clone(),
                    },
                );
                WorkflowState {
                    request: RequestState::Succeeded { summary },
                    history,
                    ..state
                }
            }

            SummarizeIntent::Failed { message } => {
                if !state.request.is_loading() {
                    return state;
                }

                WorkflowState {
                    request: RequestState::Failed { message },
                    ..state
                }
            }
        }
    }
}
