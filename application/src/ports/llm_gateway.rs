//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use quickask_domain::{Model, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer obtains a model-access
/// object. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session bound to the specified model
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Get available models
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// Handle for receiving streaming events from an LLM session.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides convenience methods
/// for consuming the stream.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text into a single string.
    pub async fn collect_text(mut self) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => full_text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        // Channel closed without Completed — return what we have
        Ok(full_text)
    }
}

/// An active LLM session (the model-access object)
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a prompt and get the completion
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Send a prompt and get a streaming completion.
    ///
    /// Default implementation calls `send()` and wraps the result in a single
    /// `Completed` event.
    async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError> {
        let result = self.send(content).await?;
        let (tx, rx) = mpsc::channel(1);
        // Receiver dropped is fine here
        let _ = tx.send(StreamEvent::Completed(result)).await;
        Ok(StreamHandle::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoSession(Model);

    #[async_trait]
    impl LlmSession for EchoSession {
        fn model(&self) -> &Model {
            &self.0
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            Ok(format!("echo: {}", content))
        }
    }

    #[tokio::test]
    async fn test_default_send_streaming_wraps_send() {
        let session = EchoSession(Model::Llama3);
        let handle = session.send_streaming("hi").await.unwrap();
        assert_eq!(handle.collect_text().await.unwrap(), "echo: hi");
    }

    #[tokio::test]
    async fn test_collect_text_prefers_deltas() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(StreamEvent::Delta("I am ".into())).await.unwrap();
        tx.send(StreamEvent::Delta("LLaMA 3".into())).await.unwrap();
        tx.send(StreamEvent::Completed("ignored".into())).await.unwrap();
        drop(tx);

        let text = StreamHandle::new(rx).collect_text().await.unwrap();
        assert_eq!(text, "I am LLaMA 3");
    }

    #[tokio::test]
    async fn test_collect_text_surfaces_error() {
        let (tx, rx) = mpsc::channel(2);
        tx.send(StreamEvent::Delta("partial".into())).await.unwrap();
        tx.send(StreamEvent::Error("boom".into())).await.unwrap();
        drop(tx);

        let err = StreamHandle::new(rx).collect_text().await.unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed(msg) if msg == "boom"));
    }
}
