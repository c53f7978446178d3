//! Core domain concepts shared across all layers.
//!
//! - [`question::Question`] — the text the user asked
//! - [`answer::Answer`] — the text the model returned
//! - [`model::Model`] — the model identifier sent to the server
//! - [`error::DomainError`] — domain-level errors

pub mod answer;
pub mod error;
pub mod model;
pub mod question;
