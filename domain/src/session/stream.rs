//! Streaming events for LLM session communication.

/// An event in a streaming LLM response.
///
/// Bridges infrastructure-level streaming (newline-delimited JSON chunks
/// from the model server) to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming.
    Error(String),
}
