use anyhow::{Result, anyhow};

use crate::completion::CompletionProvider;
use crate::conversation::ChatService;
use crate::model::Message;

/// Running conversation for the interactive front end.
pub struct Session<'a, P> {
    service: &'a ChatService<P>,
    history: Vec<Message>,
}

impl<'a, P> Session<'a, P>
where
    P: CompletionProvider,
{
    pub fn new(service: &'a ChatService<P>) -> Self {
        Self {
            service,
            history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Sends `user_input` after the current history and returns the reply.
    /// History is only replaced once the model has answered.
    pub async fn run_turn(&mut self, user_input: &str) -> Result<String> {
        let mut candidate = self.history.clone();
        candidate.push(Message::user(user_input));

        let updated = self.service.respond(&candidate).await?;
        let reply = updated
            .last()
            .map(|msg| msg.content.clone())
            .ok_or_else(|| anyhow!("conversation came back empty"))?;
        self.history = updated;
        Ok(reply)
    }
}

/// One line of REPL input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand<'a> {
    Skip,
    Exit,
    Reset,
    History,
    Ask(&'a str),
}

impl<'a> SessionCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Skip;
        }

        match line.to_ascii_lowercase().as_str() {
            "exit" | "quit" => Self::Exit,
            "/reset" => Self::Reset,
            "/history" => Self::History,
            _ => Self::Ask(line),
        }
    }
}

/// Numbered `[idx] role: content` listing of a conversation.
pub fn format_history(history: &[Message]) -> String {
    if history.is_empty() {
        return "(history is empty)".to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(idx, msg)| format!("[{}] {}: {}", idx, msg.role.as_str(), msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}
