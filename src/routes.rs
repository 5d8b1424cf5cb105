use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{protected, public};
use crate::middleware::{
    authorize_middleware, jwt_auth_middleware, resolve_trade_middleware, PolicyGate,
};
use crate::state::AppState;
use crate::types::RouteScope;

/// Resource name the trade routes are mounted under
pub const RESOURCE: &str = "trades";

/// Builds the full application router. Call once at startup.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let protected_routes =
        trade_routes(&state).layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let mut router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Policy gated
        .merge(protected_routes)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    // Global middleware
    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// Registers the trade endpoints:
///
/// - `GET /api/trades`, `POST /api/trades` behind the policy gate
/// - `GET/PUT/DELETE /api/trades/:id` behind trade resolution, then the policy gate
///
/// Route layers added later run first, so `:id` is resolved before the policy
/// sees the request.
pub fn trade_routes(state: &AppState) -> Router<AppState> {
    let collection_path = format!("/api/{}", RESOURCE);
    let item_path = format!("/api/{}/:id", RESOURCE);

    let collection = Router::new()
        .route(
            &collection_path,
            get(protected::trades_list).post(protected::trades_create),
        )
        .route_layer(from_fn_with_state(
            PolicyGate::new(state.clone(), RouteScope::Collection),
            authorize_middleware,
        ));

    let item = Router::new()
        .route(
            &item_path,
            get(protected::trade_read)
                .put(protected::trade_update)
                .delete(protected::trade_delete),
        )
        .route_layer(from_fn_with_state(
            PolicyGate::new(state.clone(), RouteScope::Item),
            authorize_middleware,
        ))
        .route_layer(from_fn_with_state(state.clone(), resolve_trade_middleware));

    collection.merge(item)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
