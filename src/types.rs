//! Shared types used across the codebase

use axum::http::Method;
use serde::{Deserialize, Serialize};

/// Operations on the trades resource
/// Used by the policy gate and the route binder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    List,
    Create,
    Read,
    Update,
    Delete,
}

/// Which of the two route shapes a request came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteScope {
    /// `/api/trades`
    Collection,
    /// `/api/trades/:id`
    Item,
}

impl Operation {
    /// Map an HTTP method on a route shape to the operation it performs.
    pub fn from_request(method: &Method, scope: RouteScope) -> Option<Self> {
        let operation = match scope {
            RouteScope::Collection if *method == Method::GET => Operation::List,
            RouteScope::Collection if *method == Method::POST => Operation::Create,
            RouteScope::Item if *method == Method::GET => Operation::Read,
            RouteScope::Item if *method == Method::PUT => Operation::Update,
            RouteScope::Item if *method == Method::DELETE => Operation::Delete,
            _ => return None,
        };
        Some(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_methods_per_scope() {
        assert_eq!(Operation::from_request(&Method::GET, RouteScope::Collection), Some(Operation::List));
        assert_eq!(Operation::from_request(&Method::GET, RouteScope::Item), Some(Operation::Read));
        assert_eq!(Operation::from_request(&Method::PUT, RouteScope::Collection), None);
        assert_eq!(Operation::from_request(&Method::DELETE, RouteScope::Item), Some(Operation::Delete));
        assert_eq!(Operation::from_request(&Method::DELETE, RouteScope::Collection), None);
    }
}
