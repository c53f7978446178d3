//! Console port
//!
//! Line-oriented terminal I/O used by the ask flow. The stdio adapter lives
//! in the presentation layer.

use thiserror::Error;

/// Errors raised by a console adapter
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("End of input reached before a line was entered")]
    EndOfInput,

    #[error("Console I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        ConsoleError::Io(e.to_string())
    }
}

/// Terminal I/O for a single question/answer exchange
pub trait ConsolePort: Send + Sync {
    /// Show `prompt` (no newline appended) and read one line.
    ///
    /// The returned line still carries its terminator, if any.
    fn read_line(&self, prompt: &str) -> Result<String, ConsoleError>;

    /// Write a complete answer followed by a newline
    fn write_answer(&self, answer: &str) -> Result<(), ConsoleError>;

    /// Write a fragment of an answer without a newline
    fn write_chunk(&self, chunk: &str) -> Result<(), ConsoleError>;

    /// Terminate a chunked answer with a newline
    fn finish_line(&self) -> Result<(), ConsoleError>;
}
