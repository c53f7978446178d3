//! Adapter for Ollama-compatible model servers
//!
//! Speaks the `/api/generate` HTTP/JSON protocol. Non-streaming requests
//! return a single JSON object; streaming requests return one JSON object
//! per line until `done` is set.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

#[cfg(test)]
mod test_server;
