use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, Claims, Role};
use crate::database::models::TradeOwner;
use crate::error::ApiError;
use crate::state::AppState;

/// Caller identity and role set, resolved once per request
#[derive(Clone, Debug)]
pub struct AuthUser {
    user_id: Option<String>,
    pub display_name: String,
    pub roles: Vec<Role>,
}

impl AuthUser {
    pub fn guest() -> Self {
        Self {
            user_id: None,
            display_name: String::new(),
            roles: vec![Role::Guest],
        }
    }

    pub fn authenticated(user_id: String, display_name: String, roles: Vec<Role>) -> Self {
        Self {
            user_id: Some(user_id),
            display_name,
            roles,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Owner stamp for trades this caller creates
    pub fn as_owner(&self) -> Option<TradeOwner> {
        self.user_id.as_ref().map(|id| TradeOwner {
            id: id.clone(),
            display_name: self.display_name.clone(),
        })
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self::authenticated(claims.sub, claims.display_name, claims.roles)
    }
}

/// Resolves the caller from an optional bearer token.
/// No Authorization header means a guest; a bad token is rejected with 401.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = match extract_jwt_from_headers(&headers)? {
        Some(token) => {
            let claims = validate_jwt(&token, &state.config.security.jwt_secret)?;
            AuthUser::from(claims)
        }
        None => AuthUser::guest(),
    };

    tracing::debug!("Request authenticated as {:?} with roles {:?}", auth_user.id(), auth_user.roles);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim().to_string())),
        Some(_) => Err(ApiError::unauthorized("Empty JWT token")),
        None => Err(ApiError::unauthorized("Authorization header must use Bearer token format")),
    }
}
