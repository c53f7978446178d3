//! Application layer for quickask
//!
//! This crate contains the use case and the port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    console::{ConsoleError, ConsolePort},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, StreamHandle},
};
pub use use_cases::run_ask::{QUESTION_PROMPT, RunAskError, RunAskInput, RunAskUseCase};
