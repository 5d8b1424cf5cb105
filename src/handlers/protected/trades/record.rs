use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};

use crate::database::models::{Trade, TradeInput};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ResolvedTrade};
use crate::state::AppState;

/// GET /api/trades/:id - Show the resolved trade
pub async fn read(
    Extension(auth_user): Extension<AuthUser>,
    Extension(ResolvedTrade(mut trade)): Extension<ResolvedTrade>,
) -> ApiResult<Trade> {
    let is_owner = auth_user.id().is_some_and(|id| trade.is_owned_by(id));
    trade.is_current_user_owner = Some(is_owner);
    Ok(ApiResponse::success(trade))
}

/// PUT /api/trades/:id - Replace title and content of the resolved trade
pub async fn update(
    State(state): State<AppState>,
    Extension(resolved): Extension<ResolvedTrade>,
    payload: Result<Json<TradeInput>, JsonRejection>,
) -> ApiResult<Trade> {
    let Json(input) = payload?;
    let input = input.normalized()?;

    let trade = state.repository.update(resolved.id()?, input).await?;
    tracing::info!("Updated trade {:?}", trade.id);

    Ok(ApiResponse::success(trade))
}

/// DELETE /api/trades/:id - Remove the resolved trade
pub async fn delete(
    State(state): State<AppState>,
    Extension(resolved): Extension<ResolvedTrade>,
) -> ApiResult<()> {
    let id = resolved.id()?;
    state.repository.delete(id).await?;
    tracing::info!("Deleted trade {}", id);

    Ok(ApiResponse::no_content())
}
