use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::completion::CompletionResponse;
use crate::config::Config;
use crate::providers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

pub async fn chat(
    client: &Client,
    cfg: &Config,
    model: &str,
    messages: &[Message],
) -> Result<CompletionResponse> {
    let provider = cfg.model_provider.to_ascii_lowercase();

    match provider.as_str() {
        "openai" => {
            debug!(
                provider = "openai",
                model = %model,
                message_count = messages.len(),
                "dispatching model chat request"
            );
            providers::openai::chat(client, cfg, model, messages).await
        }
        "ollama" => {
            debug!(
                provider = "ollama",
                model = %model,
                message_count = messages.len(),
                "dispatching model chat request"
            );
            providers::ollama::chat(client, cfg, model, messages).await
        }
        other => {
            warn!(provider = %other, "unsupported model provider configured");
            Err(anyhow!(
                "Unsupported MODEL_PROVIDER='{}'. Supported providers: openai, ollama.",
                other
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Client;

    use super::{Message, MessageRole, chat};
    use crate::config::Config;

    #[test]
    fn message_serializes_with_lowercase_role() {
        let json = serde_json::to_string(&Message::assistant("hi")).expect("serialize");
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn message_deserializes_known_roles() {
        let msg: Message =
            serde_json::from_str(r#"{"role":"system","content":"be brief"}"#).expect("parse");
        assert_eq!(msg, Message::system("be brief"));
        assert_eq!(msg.role.as_str(), "system");
    }

    #[test]
    fn message_rejects_unknown_role() {
        let parsed = serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn role_as_str_matches_wire_names() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    }

    #[tokio::test]
    async fn chat_rejects_unsupported_provider() {
        let cfg = Config {
            model_provider: "invalid".to_string(),
            model_name: "gpt-3.5-turbo".to_string(),
            model_base_url: "http://localhost:1".to_string(),
            api_key: None,
        };

        let err = chat(&Client::new(), &cfg, "gpt-3.5-turbo", &[Message::user("hi")])
            .await
            .expect_err("unsupported provider should fail");

        let msg = format!("{err:#}");
        assert!(
            msg.contains("Unsupported MODEL_PROVIDER='invalid'"),
            "unexpected error message: {msg}"
        );
    }
}
