//! Client side of the external summarization service.
//!
//! The service is an opaque HTTP endpoint: `POST /summarize` with
//! `{text, max_length, min_length}` and a `{summary}` reply.
//!
//! - `request.rs` - Style selector and wire types
//! - `error.rs` - Error taxonomy and user-facing messages
//! - `traits.rs` - `SummaryService` seam used by the workflow
//! - `client.rs` - reqwest-backed implementation

mod client;
mod error;
mod request;
mod traits;

pub use client::HttpSummaryClient;
pub use error::{ErrorKind, SummarizeError, EMPTY_INPUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
pub use request::{LengthBounds, ParseStyleError, SummarizeRequest, SummarizeResponse, SummaryStyle};
pub use traits::SummaryService;
