use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::completion::CompletionProvider;
use crate::conversation::ChatService;
use crate::session::{Session, SessionCommand, format_history};

pub async fn run_repl<P>(service: &ChatService<P>) -> Result<()>
where
    P: CompletionProvider,
{
    let mut session = Session::new(service);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("recipe-chat");
    println!("model: {}", service.model_name());
    println!(
        "ask for a recipe, '/history' to inspect the conversation, '/reset' to start over, or 'exit' to quit"
    );

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read stdin")?;

        match SessionCommand::parse(&line) {
            SessionCommand::Skip => {}
            SessionCommand::Exit => break,
            SessionCommand::Reset => {
                session.reset();
                println!("conversation reset\n");
            }
            SessionCommand::History => println!("{}\n", format_history(session.history())),
            SessionCommand::Ask(prompt) => match session.run_turn(prompt).await {
                Ok(answer) => println!("{answer}\n"),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "chat turn failed");
                    eprintln!("error: {err:#}\n");
                }
            },
        }
    }

    Ok(())
}
