pub mod commands;
pub mod utils;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::client::{TradesClient, TradesController};

#[derive(Parser)]
#[command(name = "trades")]
#[command(about = "Trades CLI - Command-line interface for the Trades API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    #[arg(
        long,
        global = true,
        env = "TRADES_SERVER",
        default_value = "http://127.0.0.1:3000",
        help = "Base URL of the Trades API"
    )]
    pub server: String,

    #[arg(long, global = true, env = "TRADES_TOKEN", help = "Bearer token sent with every request")]
    pub token: Option<String>,
}

impl ConnectionArgs {
    pub fn controller(&self) -> anyhow::Result<TradesController> {
        let mut client = TradesClient::new(&self.server)?;
        if let Some(token) = &self.token {
            client = client.with_token(token.clone());
        }
        Ok(TradesController::new(client))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Trade operations")]
    Trade {
        #[command(subcommand)]
        cmd: commands::trade::TradeCommands,
    },

    #[command(about = "Authentication and token management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Trade { cmd } => commands::trade::handle(cmd, &cli.connection, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
    }
}
