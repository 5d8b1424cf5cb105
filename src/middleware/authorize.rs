use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use super::resolve_trade::ResolvedTrade;
use crate::error::ApiError;
use crate::policy::AccessRequest;
use crate::state::AppState;
use crate::types::{Operation, RouteScope};

/// State for the policy gate: which route shape it guards
#[derive(Clone)]
pub struct PolicyGate {
    pub state: AppState,
    pub scope: RouteScope,
}

impl PolicyGate {
    pub fn new(state: AppState, scope: RouteScope) -> Self {
        Self { state, scope }
    }
}

/// Asks the configured policy whether the caller may perform this operation
pub async fn authorize_middleware(
    State(gate): State<PolicyGate>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let operation = Operation::from_request(request.method(), gate.scope)
        .ok_or_else(|| ApiError::method_not_allowed("Method not allowed"))?;

    let user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .unwrap_or_else(AuthUser::guest);
    let resource = request
        .extensions()
        .get::<ResolvedTrade>()
        .map(|resolved| &resolved.0);

    let allowed = gate.state.policy.is_allowed(&AccessRequest {
        user: &user,
        operation,
        resource,
    });

    if !allowed {
        tracing::warn!("Denied {:?} for user {:?} with roles {:?}", operation, user.id(), user.roles);
        return Err(ApiError::forbidden("User is not authorized"));
    }

    tracing::debug!("Allowed {:?} for user {:?}", operation, user.id());
    Ok(next.run(request).await)
}
