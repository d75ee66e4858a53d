/// Marker trait for intent objects.
///
/// Intents are user actions (edits, key presses) or system events
/// (a summarization call settling).
pub trait Intent: Send + 'static {}
