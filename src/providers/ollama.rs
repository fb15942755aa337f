use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::completion::CompletionResponse;
use crate::config::Config;
use crate::model::Message;
use crate::providers::http_errors::{model_api_request_error, model_api_status_error};

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

fn chat_url(base_url: &str) -> String {
    format!("{}/api/chat", base_url.trim_end_matches('/'))
}

pub async fn chat(
    client: &Client,
    cfg: &Config,
    model: &str,
    messages: &[Message],
) -> Result<CompletionResponse> {
    let api_url = chat_url(&cfg.model_base_url);
    let body = OllamaChatRequest {
        model,
        stream: false,
        messages,
    };
    debug!(
        api_url = %api_url,
        model = %model,
        message_count = messages.len(),
        "sending ollama chat request"
    );

    let response = client
        .post(&api_url)
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            warn!(
                api_url = %api_url,
                model = %model,
                error = %err,
                "ollama request failed"
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
            "ollama returned non-success status"
        );
        return Err(model_api_status_error(status, &response_body));
    }

    let parsed: OllamaChatResponse = response
        .json()
        .await
        .context("Failed to parse model chat response")?;
    debug!(
        model = %model,
        response_len = parsed.message.content.len(),
        "received ollama chat response"
    );
    Ok(CompletionResponse::from_contents([parsed.message.content]))
}
