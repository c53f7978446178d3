//! Presentation layer for quickask
//!
//! This crate contains the CLI definition and the terminal
//! adapter behind the console port.

pub mod cli;
pub mod console;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::line_console::{LineConsole, StdioConsole};
