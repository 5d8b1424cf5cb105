#![allow(dead_code)]

use anyhow::{Context, Result};

use trades_api::auth::{generate_jwt, Claims, Role};
use trades_api::config::AppConfig;
use trades_api::routes::app;
use trades_api::state::AppState;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub config: AppConfig,
}

impl TestServer {
    /// Serve the real router with an in-memory store on a free port
    pub async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = AppConfig::development();
        let state = AppState::in_memory(config.clone());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        Ok(Self { port, base_url, config })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token for a user with the given roles
    pub fn token(&self, user: &str, roles: &[Role]) -> String {
        let claims = Claims::new(user.to_string(), format!("{} display", user), roles.to_vec(), 1)
            .expect("test claims");
        generate_jwt(&claims, &self.config.security.jwt_secret).expect("test token")
    }
}
