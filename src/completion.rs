use anyhow::Result;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use crate::config::Config;
use crate::model::{self, Message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceMessage {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

/// Provider output reduced to the shape the conversation service reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    pub fn from_contents<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: contents
                .into_iter()
                .map(|content| CompletionChoice {
                    message: ChoiceMessage {
                        content: content.into(),
                    },
                })
                .collect(),
        }
    }

    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CompletionResponse>> + Send + 'a>>;

pub trait CompletionProvider {
    fn complete<'a>(&'a self, model: &'a str, messages: &'a [Message]) -> CompletionFuture<'a>;
}

/// Completion provider backed by the HTTP provider selected in [`Config`].
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    cfg: Config,
}

impl ProviderClient {
    pub fn new(client: Client, cfg: Config) -> Self {
        Self { client, cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

impl CompletionProvider for ProviderClient {
    fn complete<'a>(&'a self, model: &'a str, messages: &'a [Message]) -> CompletionFuture<'a> {
        Box::pin(async move { model::chat(&self.client, &self.cfg, model, messages).await })
    }
}
