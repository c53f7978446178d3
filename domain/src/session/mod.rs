//! Session-level types exchanged with LLM back-ends

pub mod stream;
