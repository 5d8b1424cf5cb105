use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::database::models::{Trade, TradeId};
use crate::error::ApiError;
use crate::state::AppState;

/// Trade loaded from the `:id` path segment, available to the policy gate and handlers
#[derive(Clone, Debug)]
pub struct ResolvedTrade(pub Trade);

impl ResolvedTrade {
    pub fn id(&self) -> Result<&TradeId, ApiError> {
        self.0
            .id
            .as_ref()
            .ok_or_else(|| ApiError::internal_server_error("Resolved trade has no identifier"))
    }
}

/// Turns `:id` into a loaded trade before anything else on the item routes runs
pub async fn resolve_trade_middleware(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let id = TradeId::parse(&raw_id).ok_or_else(|| ApiError::bad_request("Trade is invalid"))?;

    let trade = state
        .repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Trade {} not found", id);
            ApiError::not_found("No trade with that identifier has been found")
        })?;

    tracing::debug!("Resolved trade {}", id);
    request.extensions_mut().insert(ResolvedTrade(trade));

    Ok(next.run(request).await)
}
