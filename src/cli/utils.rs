use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::database::models::Trade;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Output a list of trades, one line each in text mode
pub fn output_trades(output_format: &OutputFormat, trades: &[Trade]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(trades)?);
        }
        OutputFormat::Text => {
            if trades.is_empty() {
                println!("No trades found");
            }
            for trade in trades {
                println!("{}", trade_line(trade));
            }
        }
    }
    Ok(())
}

/// Output a single trade with its content
pub fn output_trade(output_format: &OutputFormat, trade: &Trade) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(trade)?);
        }
        OutputFormat::Text => {
            println!("{}", trade_line(trade));
            if let Some(owner) = &trade.user {
                println!("Owner: {}", owner.display_name);
            }
            if !trade.content.is_empty() {
                println!();
                println!("{}", trade.content);
            }
        }
    }
    Ok(())
}

fn trade_line(trade: &Trade) -> String {
    let id = trade.id.as_ref().map(|id| id.as_str()).unwrap_or("-");
    match trade.created {
        Some(created) => format!("{}  {}  {}", id, created.format("%Y-%m-%d %H:%M"), trade.title),
        None => format!("{}  {}", id, trade.title),
    }
}
