use anyhow::{Result, anyhow};

use crate::completion::CompletionProvider;
use crate::model::{Message, MessageRole};
use crate::prompt::SYSTEM_PROMPT;

/// Forwards a conversation to a completion provider and appends the reply.
///
/// Holds no per-call state; one instance can serve concurrent callers as long
/// as the provider can.
#[derive(Debug, Clone)]
pub struct ChatService<P> {
    provider: P,
    model_name: String,
}

impl<P> ChatService<P> {
    pub fn new(provider: P, model_name: impl Into<String>) -> Self {
        Self {
            provider,
            model_name: model_name.into(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> ChatService<P>
where
    P: CompletionProvider,
{
    /// Returns `conversation` (with the system prompt prepended when it does
    /// not start with a system turn) followed by the model's trimmed reply.
    ///
    /// Provider errors are returned as-is and nothing is appended.
    pub async fn respond(&self, conversation: &[Message]) -> Result<Vec<Message>> {
        let mut messages = with_system_prompt(conversation);

        let completion = self
            .provider
            .complete(&self.model_name, &messages)
            .await?;
        let reply = completion
            .first_content()
            .ok_or_else(|| anyhow!("Model response contained no choices"))?
            .trim()
            .to_string();

        messages.push(Message::assistant(reply));
        Ok(messages)
    }
}

/// Copies `conversation`, inserting [`SYSTEM_PROMPT`] at the front unless the
/// first turn is already a system turn.
pub fn with_system_prompt(conversation: &[Message]) -> Vec<Message> {
    match conversation.first() {
        Some(first) if first.role == MessageRole::System => conversation.to_vec(),
        _ => {
            let mut messages = Vec::with_capacity(conversation.len() + 2);
            messages.push(Message::system(SYSTEM_PROMPT));
            messages.extend_from_slice(conversation);
            messages
        }
    }
}
