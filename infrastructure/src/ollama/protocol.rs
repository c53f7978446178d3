//! Wire types for the `/api/generate` and `/api/tags` endpoints

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// One `/api/generate` reply; with `stream: true` the server sends one per line
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateResponse {
    pub model: Option<String>,
    pub response: String,
    pub done: bool,
    pub error: Option<String>,
}

/// Body of `GET /api/tags`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TagsResponse {
    pub models: Vec<TagModel>,
}

#[derive(Debug, Deserialize)]
pub struct TagModel {
    pub name: String,
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Split complete lines off the front of `buffer`.
///
/// Bytes after the last `\n` stay in the buffer for the next chunk. Blank
/// lines are dropped.
pub fn drain_lines(buffer: &mut Vec<u8>) -> Vec<String> {
    let Some(last_newline) = buffer.iter().rposition(|b| *b == b'\n') else {
        return Vec::new();
    };
    let rest = buffer.split_off(last_newline + 1);
    let complete = std::mem::replace(buffer, rest);

    complete
        .split(|b| *b == b'\n')
        .map(|line| String::from_utf8_lossy(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
