use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::completion::CompletionResponse;
use crate::config::Config;
use crate::model::Message;
use crate::providers::http_errors::{model_api_request_error, model_api_status_error};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl From<ChatCompletionResponse> for CompletionResponse {
    fn from(response: ChatCompletionResponse) -> Self {
        CompletionResponse::from_contents(
            response
                .choices
                .into_iter()
                .map(|choice| choice.message.content.unwrap_or_default()),
        )
    }
}

fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

pub async fn chat(
    client: &Client,
    cfg: &Config,
    model: &str,
    messages: &[Message],
) -> Result<CompletionResponse> {
    let api_url = chat_completions_url(&cfg.model_base_url);
    let body = ChatCompletionRequest { model, messages };
    debug!(
        api_url = %api_url,
        model = %model,
        message_count = messages.len(),
        authenticated = cfg.api_key.is_some(),
        "sending openai chat completion request"
    );

    let mut request = client.post(&api_url).json(&body);
    if let Some(api_key) = cfg.api_key.as_deref() {
        request = request.bearer_auth(api_key);
    }

    let response = request.send().await.map_err(|err| {
        warn!(
            api_url = %api_url,
            model = %model,
            error = %err,
            "openai request failed"
        );
        model_api_request_error(err, &api_url)
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let response_body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string());
        warn!(
            api_url = %api_url,
            model = %model,
            status = %status,
            response_body_len = response_body.len(),
            "openai returned non-success status"
        );
        return Err(model_api_status_error(status, &response_body));
    }

    let parsed: ChatCompletionResponse = response
        .json()
        .await
        .context("Failed to parse model chat response")?;
    debug!(
        model = %model,
        choice_count = parsed.choices.len(),
        "received openai chat completion response"
    );
    Ok(parsed.into())
}
