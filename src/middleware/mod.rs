pub mod auth;
pub mod authorize;
pub mod resolve_trade;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use authorize::{authorize_middleware, PolicyGate};
pub use resolve_trade::{resolve_trade_middleware, ResolvedTrade};
pub use response::{ApiResponse, ApiResult};
