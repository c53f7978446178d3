//! Ollama session: one model, `/api/generate` per prompt

use super::error::{OllamaError, Result};
use super::protocol::{ErrorResponse, GenerateRequest, GenerateResponse, drain_lines};
use async_trait::async_trait;
use quickask_application::{GatewayError, LlmSession, StreamHandle};
use quickask_domain::{Model, StreamEvent};
use tokio::sync::mpsc;
use tracing::{debug, warn};

const STREAM_CHANNEL_CAPACITY: usize = 64;

/// A model-access object bound to one model on one server
pub struct OllamaSession {
    client: reqwest::Client,
    base_url: String,
    model: Model,
}

impl OllamaSession {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, model: Model) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    async fn post_generate(&self, prompt: &str, stream: bool) -> Result<reqwest::Response> {
        let request = GenerateRequest {
            model: self.model.as_str(),
            prompt,
            stream,
        };
        debug!(
            "POST {} (model={}, stream={})",
            self.generate_url(),
            self.model,
            stream
        );
        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await?;
        check_status(response).await
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self.post_generate(prompt, false).await?;
        let body = response.text().await?;
        let reply: GenerateResponse = serde_json::from_str(&body)?;
        if let Some(error) = reply.error {
            return Err(OllamaError::Server(error));
        }
        Ok(reply.response)
    }
}

/// Turn a non-success status into [`OllamaError::Status`], preferring the
/// server's `{"error": ...}` message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
    };
    warn!("Model server returned {}: {}", status.as_u16(), message);

    Err(OllamaError::Status {
        status: status.as_u16(),
        message,
    })
}

enum LineOutcome {
    Continue,
    Finished,
}

/// Forward one NDJSON line as stream events.
async fn forward_line(
    tx: &mpsc::Sender<StreamEvent>,
    line: &str,
    full_text: &mut String,
) -> LineOutcome {
    let reply: GenerateResponse = match serde_json::from_str(line) {
        Ok(reply) => reply,
        Err(e) => {
            let _ = tx
                .send(StreamEvent::Error(format!("Invalid stream line: {}", e)))
                .await;
            return LineOutcome::Finished;
        }
    };

    if let Some(error) = reply.error {
        let _ = tx.send(StreamEvent::Error(error)).await;
        return LineOutcome::Finished;
    }

    if !reply.response.is_empty() {
        full_text.push_str(&reply.response);
        if tx.send(StreamEvent::Delta(reply.response)).await.is_err() {
            return LineOutcome::Finished;
        }
    }

    if reply.done {
        let _ = tx
            .send(StreamEvent::Completed(std::mem::take(full_text)))
            .await;
        return LineOutcome::Finished;
    }

    LineOutcome::Continue
}

/// Read the NDJSON body chunk by chunk until the server marks it done.
async fn pump_stream(mut response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
    let mut buffer = Vec::new();
    let mut full_text = String::new();

    loop {
        match response.chunk().await {
            Ok(Some(bytes)) => {
                buffer.extend_from_slice(&bytes);
                for line in drain_lines(&mut buffer) {
                    if let LineOutcome::Finished = forward_line(&tx, &line, &mut full_text).await {
                        return;
                    }
                }
            }
            Ok(None) => {
                // Body ended without `done`; flush any unterminated last line
                buffer.push(b'\n');
                for line in drain_lines(&mut buffer) {
                    if let LineOutcome::Finished = forward_line(&tx, &line, &mut full_text).await {
                        return;
                    }
                }
                let _ = tx.send(StreamEvent::Completed(full_text)).await;
                return;
            }
            Err(e) => {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
        }
    }
}

#[async_trait]
impl LlmSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        Ok(self.generate(content).await?)
    }

    async fn send_streaming(
        &self,
        content: &str,
    ) -> std::result::Result<StreamHandle, GatewayError> {
        let response = self.post_generate(content, true).await?;
        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        tokio::spawn(pump_stream(response, tx));
        Ok(StreamHandle::new(rx))
    }
}
