//! Domain layer for quickask
//!
//! This crate contains the value objects shared by every layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! A run asks one [`Question`] of one [`Model`] and yields one [`Answer`].

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::ServerHost;
pub use core::{answer::Answer, error::DomainError, model::Model, question::Question};
pub use session::stream::StreamEvent;
