//! Interactive chat loop against the real model.
//!
//! Expects `OPENAI_API_KEY` (and optionally `CHAT_MODEL`,
//! `OPENAI_BASE_URL`) in the environment and a data directory of
//! `<table>.json` files, `./data` by default or `DESKBOT_DATA_DIR`.

use anyhow::Context;
use deskbot_model::OpenAiClient;
use deskbot_runner::{init_tracing, Chatbot};
use deskbot_session::JsonFileSessionStore;
use deskbot_store::{JsonDirSource, TabularStore};
use std::io::{BufRead, Write};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let data_dir =
        std::env::var("DESKBOT_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let source = JsonDirSource::new(&data_dir);
    let store = TabularStore::load_all(&source)
        .await
        .with_context(|| format!("loading tables from {data_dir}"))?;

    let model = OpenAiClient::from_env().context("configuring the chat model")?;
    let sessions = JsonFileSessionStore::open("sessions/_metadata.json").await?;

    let bot = Chatbot::builder()
        .model(Arc::new(model))
        .store(Arc::new(store))
        .session_store(Arc::new(sessions))
        .build()?;

    let session_id = uuid::Uuid::new_v4().to_string();
    println!("deskbot ready (session {session_id}). Empty line to quit.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            break;
        }

        let reply = bot.respond(&session_id, message).await?;
        println!("{reply}\n");
    }

    Ok(())
}
