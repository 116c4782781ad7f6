mod chat;
mod render;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use finbot_sdk::config::timeout_from_secs;
use finbot_sdk::{ApiConfig, FinbotClient, TickerLookup};

#[derive(Parser, Debug)]
#[command(name = "finbot-cli")]
#[command(about = "Finbot stock-analysis assistant in the terminal")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Backend base URL (overrides FINBOT_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds, 0 disables it (overrides FINBOT_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a company by ticker
    Ticker {
        /// Ticker symbol (ex: AAPL)
        ticker: String,

        /// Continue into a chat about the returned symbol
        #[arg(long)]
        chat: bool,
    },
    /// Chat about a symbol
    Chat {
        /// Ticker symbol (ex: AAPL)
        symbol: String,
    },
}

impl Cli {
    fn api_config(&self) -> ApiConfig {
        let mut config = ApiConfig::from_env();
        if let Some(url) = &self.api_url {
            config = ApiConfig::new(url, config.credential).with_timeout(config.timeout);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(timeout_from_secs(secs));
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = FinbotClient::new(cli.api_config())?;

    match cli.command {
        Command::Ticker { ticker, chat } => {
            let mut lookup = TickerLookup::new();
            lookup.set_ticker(&ticker);
            if !lookup.analyze(&client).await {
                bail!(lookup.error().unwrap_or("lookup failed").to_string());
            }
            if let Some(info) = lookup.stock_info() {
                print!("{}", render::stock_panel(info));
            }
            if chat {
                let Some(symbol) = lookup.chat_symbol() else {
                    bail!("the backend returned no symbol to chat about");
                };
                chat::run(&client, symbol.to_string()).await?;
            }
        }
        Command::Chat { symbol } => chat::run(&client, symbol).await?,
    }
    Ok(())
}
