pub mod completion;
pub mod config;
pub mod conversation;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod repl;
pub mod session;
pub mod transcript;

use anyhow::{Context, Result};
use reqwest::Client;
use std::env;
use std::io::{self, Read};
use tracing::info;

use completion::ProviderClient;
use config::Config;
use conversation::ChatService;
use model::Message;
use repl::run_repl;
use transcript::{parse_transcript, render_transcript};

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cfg = Config::from_env();
    info!(
        provider = %cfg.model_provider,
        model = %cfg.model_name,
        base_url = %cfg.model_base_url,
        api_key_set = cfg.api_key.is_some(),
        "loaded runtime configuration"
    );

    let client = Client::builder()
        .build()
        .context("Failed to initialize HTTP client")?;
    let provider = ProviderClient::new(client, cfg);
    let model_name = provider.config().model_name.clone();
    let service = ChatService::new(provider, model_name);

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_repl(&service).await,
        [flag] if flag == "-" => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            let conversation = parse_transcript(&raw)?;
            let updated = service.respond(&conversation).await?;
            println!("{}", render_transcript(&updated)?);
            Ok(())
        }
        words => {
            let prompt = words.join(" ");
            let updated = service.respond(&[Message::user(prompt)]).await?;
            if let Some(reply) = updated.last() {
                println!("{}", reply.content);
            }
            Ok(())
        }
    }
}
