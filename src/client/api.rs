use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::database::models::{Trade, TradeId, TradeInput};
use crate::routes::RESOURCE;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error body
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("trade has no identifier")]
    MissingId,
}

impl ClientError {
    /// Text shown to the user for this failure
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the trades endpoints
#[derive(Debug, Clone)]
pub struct TradesClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl TradesClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Self::with_http(http, base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        // Relative joins need a trailing slash to keep any path prefix
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        Ok(Self {
            http,
            base_url: Url::parse(&base)?,
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn list(&self) -> Result<Vec<Trade>, ClientError> {
        let response = self.send(self.request(Method::GET, None)?).await?;
        Ok(response.json().await?)
    }

    pub async fn get(&self, id: &TradeId) -> Result<Trade, ClientError> {
        let response = self.send(self.request(Method::GET, Some(id))?).await?;
        Ok(response.json().await?)
    }

    pub async fn create(&self, input: &TradeInput) -> Result<Trade, ClientError> {
        let request = self.request(Method::POST, None)?.json(input);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Sends the trade's current fields. Any success status is accepted and
    /// the response body is not read.
    pub async fn update(&self, trade: &Trade) -> Result<(), ClientError> {
        let id = trade.id.as_ref().ok_or(ClientError::MissingId)?;
        let request = self.request(Method::PUT, Some(id))?.json(trade);
        self.send(request).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &TradeId) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, Some(id))?).await?;
        Ok(())
    }

    fn request(&self, method: Method, id: Option<&TradeId>) -> Result<RequestBuilder, ClientError> {
        let path = match id {
            Some(id) => format!("api/{}/{}", RESOURCE, id),
            None => format!("api/{}", RESOURCE),
        };
        let url = self.base_url.join(&path)?;

        let mut request = self.http.request(method, url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        tracing::debug!("Trades API returned {}: {}", status, message);

        Err(ClientError::Api { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_path_prefix() {
        let client = TradesClient::new("http://localhost:3000/app").unwrap();
        let id = TradeId::parse("525a8422f6d0f87f0e407a33").unwrap();
        let request = client.request(Method::GET, Some(&id)).unwrap().build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:3000/app/api/trades/525a8422f6d0f87f0e407a33"
        );
    }

    #[test]
    fn token_is_sent_as_bearer() {
        let client = TradesClient::new("http://localhost:3000").unwrap().with_token("abc");
        let request = client.request(Method::GET, None).unwrap().build().unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer abc");
    }

    #[test]
    fn api_error_message_is_verbatim() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "this is an error message".into(),
        };
        assert_eq!(err.message(), "this is an error message");
    }
}
