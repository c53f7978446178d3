//! Ollama LLM Gateway implementation

use super::error::{OllamaError, Result};
use super::protocol::TagsResponse;
use super::session::OllamaSession;
use async_trait::async_trait;
use quickask_application::{GatewayError, LlmGateway, LlmSession};
use quickask_domain::{Model, ServerHost};
use tracing::{debug, info};

/// LLM Gateway implementation for an Ollama-compatible HTTP server
pub struct OllamaLlmGateway {
    client: reqwest::Client,
    host: ServerHost,
}

impl OllamaLlmGateway {
    /// Create a gateway for the server at `host`.
    ///
    /// Does not contact the server. No request timeout is set.
    pub fn new(host: ServerHost) -> std::result::Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quickask/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("OllamaLlmGateway initialized for {}", host);

        Ok(Self { client, host })
    }

    async fn list_tags(&self) -> Result<TagsResponse> {
        let url = format!("{}/api/tags", self.host.base_url());
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn create_session(
        &self,
        model: &Model,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        if model.as_str().trim().is_empty() {
            return Err(GatewayError::ModelNotAvailable(
                "model identifier is empty".to_string(),
            ));
        }

        debug!("Creating session for model {} at {}", model, self.host);
        Ok(Box::new(OllamaSession::new(
            self.client.clone(),
            self.host.base_url(),
            model.clone(),
        )))
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        let tags = self.list_tags().await?;
        Ok(tags
            .models
            .into_iter()
            .map(|m| {
                let Ok(model) = m.name.parse::<Model>();
                model
            })
            .collect())
    }
}
