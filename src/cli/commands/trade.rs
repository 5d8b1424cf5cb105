use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_success, output_trade, output_trades};
use crate::cli::{ConnectionArgs, OutputFormat};
use crate::client::{StateParams, TradesController};

#[derive(Subcommand)]
pub enum TradeCommands {
    #[command(about = "List all trades, newest first")]
    List,

    #[command(about = "Show a single trade")]
    Show {
        #[arg(help = "Trade ID")]
        id: String,
    },

    #[command(about = "Create a trade")]
    Create {
        #[arg(long, help = "Trade title")]
        title: String,
        #[arg(long, default_value = "", help = "Trade content")]
        content: String,
    },

    #[command(about = "Update a trade's title and/or content")]
    Update {
        #[arg(help = "Trade ID")]
        id: String,
        #[arg(long, help = "New title")]
        title: Option<String>,
        #[arg(long, help = "New content")]
        content: Option<String>,
    },

    #[command(about = "Delete a trade")]
    Delete {
        #[arg(help = "Trade ID")]
        id: String,
    },
}

pub async fn handle(
    cmd: TradeCommands,
    connection: &ConnectionArgs,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let mut controller = connection.controller()?;

    match cmd {
        TradeCommands::List => {
            let view = controller.find().await?;
            output_trades(&output_format, &view.trades)
        }
        TradeCommands::Show { id } => {
            load(&mut controller, id).await?;
            match &controller.view().trade {
                Some(trade) => output_trade(&output_format, trade),
                None => Ok(()),
            }
        }
        TradeCommands::Create { title, content } => {
            controller.update_view(|view| view.with_form(title, content));
            let view = controller.create().await?;
            let location = view.location.as_ref().map(|l| l.path().to_string());
            output_success(
                &output_format,
                "Trade created",
                Some(json!({ "location": location })),
            )
        }
        TradeCommands::Update { id, title, content } => {
            load(&mut controller, id).await?;
            controller.update_view(|view| {
                let trade = view.trade.clone().map(|mut trade| {
                    if let Some(title) = title {
                        trade.title = title;
                    }
                    if let Some(content) = content {
                        trade.content = content;
                    }
                    trade
                });
                match trade {
                    Some(trade) => view.with_trade(trade),
                    None => view,
                }
            });
            let view = controller.update().await?;
            let location = view.location.as_ref().map(|l| l.path().to_string());
            output_success(
                &output_format,
                "Trade updated",
                Some(json!({ "location": location })),
            )
        }
        TradeCommands::Delete { id } => {
            load(&mut controller, id).await?;
            controller.remove(None).await?;
            output_success(&output_format, "Trade deleted", None)
        }
    }
}

/// Navigate to the trade's detail screen and load it
async fn load(controller: &mut TradesController, id: String) -> anyhow::Result<()> {
    controller.update_view(|view| {
        view.with_params(StateParams {
            trade_id: Some(id),
        })
    });
    controller.find_one().await?;
    Ok(())
}
