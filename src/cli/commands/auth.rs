use clap::Subcommand;
use serde_json::json;

use crate::auth::{generate_jwt, Claims, Role};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Mint a bearer token signed with the configured JWT secret")]
    Token {
        #[arg(long, help = "User ID recorded as trade owner")]
        user: String,
        #[arg(long, help = "Display name")]
        name: Option<String>,
        #[arg(long = "role", default_value = "user", help = "Role (admin, user, guest); repeatable")]
        roles: Vec<Role>,
    },
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Token { user, name, roles } => {
            let security = &config::config().security;
            let display_name = name.unwrap_or_else(|| user.clone());
            let claims = Claims::new(user, display_name, roles, security.jwt_expiry_hours)?;
            let token = generate_jwt(&claims, &security.jwt_secret)?;

            match output_format {
                OutputFormat::Json => output_success(
                    &output_format,
                    "Token generated",
                    Some(json!({ "token": token, "expires_at": claims.exp })),
                ),
                OutputFormat::Text => {
                    println!("{}", token);
                    Ok(())
                }
            }
        }
    }
}
