use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};

use crate::database::models::{Trade, TradeInput};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/trades - List all trades, newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Trade>> {
    let trades = state.repository.list().await?;
    Ok(ApiResponse::success(trades))
}

/// POST /api/trades - Create a trade owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    payload: Result<Json<TradeInput>, JsonRejection>,
) -> ApiResult<Trade> {
    let Json(input) = payload?;
    let input = input.normalized()?;

    let trade = state.repository.create(input, auth_user.as_owner()).await?;
    tracing::info!("Created trade {:?} for user {:?}", trade.id, auth_user.id());

    Ok(ApiResponse::created(trade))
}
