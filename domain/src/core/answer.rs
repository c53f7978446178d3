//! Answer value object

use serde::{Deserialize, Serialize};

/// The text a model produced for a [`Question`](super::question::Question)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    content: String,
}

impl Answer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::new(s)
    }
}
