use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Message;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptInput {
    Messages(Vec<Message>),
    Envelope { messages: Vec<Message> },
}

/// Accepts either a bare JSON array of turns or `{"messages": [...]}`.
pub fn parse_transcript(raw: &str) -> Result<Vec<Message>> {
    let input: TranscriptInput =
        serde_json::from_str(raw).context("Failed to parse conversation JSON")?;
    Ok(match input {
        TranscriptInput::Messages(messages) => messages,
        TranscriptInput::Envelope { messages } => messages,
    })
}

pub fn render_transcript(messages: &[Message]) -> Result<String> {
    serde_json::to_string_pretty(messages).context("Failed to encode conversation JSON")
}
