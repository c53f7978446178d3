//! Question value object

use serde::{Deserialize, Serialize};

/// A question to be answered by the model (Value Object)
///
/// Holds the text exactly as the user entered it. Any string is a valid
/// question, including the empty one; the content is never trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question from its exact content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create a question from a raw line read from a terminal.
    ///
    /// Only the line terminator (`\n` or `\r\n`) is removed.
    pub fn from_line(line: impl Into<String>) -> Self {
        let mut content = line.into();
        if content.ends_with('\n') {
            content.pop();
            if content.ends_with('\r') {
                content.pop();
            }
        }
        Self { content }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
