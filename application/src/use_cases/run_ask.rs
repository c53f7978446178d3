//! Run Ask use case.
//!
//! One question, one model, one answer: prompt on the console, read a line,
//! open a session with the configured model, send the line once, print what
//! comes back.

use crate::ports::console::{ConsoleError, ConsolePort};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use quickask_domain::{Answer, Model, Question, StreamEvent};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Prompt shown before reading the question.
pub const QUESTION_PROMPT: &str = "What is your question?";

/// Errors that can occur during Ask execution.
#[derive(Error, Debug)]
pub enum RunAskError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`RunAskUseCase`].
#[derive(Debug, Clone)]
pub struct RunAskInput {
    /// Model the session is created with.
    pub model: Model,
    /// Literal prompt shown before the question is read.
    pub prompt: String,
    /// Write the answer incrementally as it is generated.
    pub stream: bool,
}

impl RunAskInput {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            prompt: QUESTION_PROMPT.to_string(),
            stream: false,
        }
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

impl Default for RunAskInput {
    fn default() -> Self {
        Self::new(Model::Llama3)
    }
}

/// Use case for running a single Ask interaction.
///
/// 1. Read one line from the console
/// 2. Create a session with `input.model`
/// 3. Send the line exactly once
/// 4. Write the answer exactly once
pub struct RunAskUseCase {
    gateway: Arc<dyn LlmGateway>,
    console: Arc<dyn ConsolePort>,
}

impl Clone for RunAskUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            console: self.console.clone(),
        }
    }
}

impl RunAskUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, console: Arc<dyn ConsolePort>) -> Self {
        Self { gateway, console }
    }

    /// Execute the Ask interaction.
    ///
    /// Nothing is written after the prompt unless the model call succeeds
    /// (or, when streaming, until the first chunk arrives).
    pub async fn execute(&self, input: RunAskInput) -> Result<Answer, RunAskError> {
        let line = self.console.read_line(&input.prompt)?;
        let question = Question::from_line(line);

        info!("Starting Ask interaction with model {}", input.model);
        debug!("Question: {} chars", question.content().chars().count());

        let session = self.gateway.create_session(&input.model).await?;

        let answer = if input.stream {
            self.ask_streaming(session.as_ref(), &question).await?
        } else {
            let text = session.send(question.content()).await?;
            self.console.write_answer(&text)?;
            Answer::new(text)
        };

        info!("Ask completed: {} chars", answer.content().chars().count());
        Ok(answer)
    }

    async fn ask_streaming(
        &self,
        session: &dyn LlmSession,
        question: &Question,
    ) -> Result<Answer, RunAskError> {
        let mut handle = session.send_streaming(question.content()).await?;
        let mut full_text = String::new();

        while let Some(event) = handle.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    self.console.write_chunk(&chunk)?;
                    full_text.push_str(&chunk);
                }
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        self.console.write_chunk(&text)?;
                        full_text = text;
                    }
                    break;
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e).into());
                }
            }
        }

        self.console.finish_line()?;
        Ok(Answer::new(full_text))
    }
}
