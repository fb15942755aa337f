use std::env;

const DEFAULT_MODEL_PROVIDER: &str = "openai";
const DEFAULT_MODEL_NAME: &str = "gpt-3.5-turbo";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub model_provider: String,
    pub model_name: String,
    pub model_base_url: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        let model_provider = non_empty(get_var("MODEL_PROVIDER"))
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_MODEL_PROVIDER.to_string());
        let model_base_url = non_empty(get_var("MODEL_BASE_URL"))
            .unwrap_or_else(|| default_base_url(&model_provider).to_string());

        Self {
            model_name: non_empty(get_var("MODEL_NAME"))
                .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
            model_base_url,
            api_key: non_empty(get_var("OPENAI_API_KEY")),
            model_provider,
        }
    }
}

// Keeps the key out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("model_provider", &self.model_provider)
            .field("model_name", &self.model_name)
            .field("model_base_url", &self.model_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// Blank counts as unset; anything else is passed through as written.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

fn default_base_url(provider: &str) -> &'static str {
    match provider {
        "ollama" => DEFAULT_OLLAMA_BASE_URL,
        _ => DEFAULT_OPENAI_BASE_URL,
    }
}
