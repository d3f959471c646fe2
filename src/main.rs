//! Buddy - build your own AI friend
//!
//! A custom chatbot creator for kids:
//! - pick a name, personality, and specialty for your bot
//! - the persona compiles into a hidden system instruction
//! - chat turn by turn through Groq's chat-completions API

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use buddy::config::Config;
use buddy::provider::GroqProvider;
use buddy::repl::Repl;
use buddy::repl::colors::{self, ansi::*};
use buddy::turn::{self, TurnExecutor, TurnOptions};

#[derive(Parser)]
#[command(name = "buddy")]
#[command(about = "Build your own AI friend")]
struct Args {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY")]
    groq_api_key: Option<String>,

    /// Model identifier
    #[arg(long, env = "BUDDY_MODEL")]
    model: Option<String>,

    /// Chat-completions endpoint override
    #[arg(long, env = "BUDDY_API_URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (from ~/.buddy/.env or current dir)
    let env_path = dirs::home_dir()
        .map(|h| h.join(".buddy").join(".env"))
        .filter(|p| p.exists());
    if let Some(path) = env_path {
        let _ = dotenvy::from_path(&path);
    } else {
        let _ = dotenvy::dotenv(); // fallback to current dir
    }

    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Load config file (~/.buddy/config.toml)
    let config = Config::load();

    // Resolve values: CLI args > env vars (handled by clap) > config file
    // No key, no session: refuse to start rather than fail per-turn later.
    let api_key = args.groq_api_key.or(config.groq_api_key).ok_or_else(|| {
        anyhow::anyhow!(
            "❌ GROQ_API_KEY not found. Set it via --groq-api-key, the environment, \
             a .env file, or ~/.buddy/config.toml."
        )
    })?;

    let model = args
        .model
        .or(config.model)
        .unwrap_or_else(|| turn::DEFAULT_MODEL.to_string());

    let api_url = args.api_url.or(config.api_url);

    // Pretty startup banner
    println!();
    println!(
        "{}{}🤖 Buddy {}{}",
        BOLD,
        MAGENTA,
        env!("CARGO_PKG_VERSION"),
        RESET
    );
    println!("{}", colors::separator(50));
    println!("{}Model{}    {}", DIM, RESET, model);
    println!(
        "{}API key{}  {}",
        DIM,
        RESET,
        colors::success("configured")
    );
    println!("{}", colors::separator(50));

    let mut provider = GroqProvider::new(api_key)?;
    if let Some(url) = api_url {
        provider = provider.with_api_url(url);
    }

    let executor = TurnExecutor::new(Arc::new(provider)).with_options(TurnOptions {
        model,
        ..TurnOptions::default()
    });

    let mut repl = Repl::new(executor)?;
    repl.run().await
}
