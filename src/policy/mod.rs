//! Authorization decisions for the trades routes.
//!
//! The route binder consults a [`Policy`] before every handler. The default
//! [`AclPolicy`] grants operations per role and lets owners manage their own
//! trades.

use std::collections::HashMap;

use crate::auth::Role;
use crate::database::models::Trade;
use crate::middleware::AuthUser;
use crate::types::Operation;

/// Everything a policy gets to look at for one request
#[derive(Debug, Clone, Copy)]
pub struct AccessRequest<'a> {
    pub user: &'a AuthUser,
    pub operation: Operation,
    /// Resolved trade on item routes
    pub resource: Option<&'a Trade>,
}

pub trait Policy: Send + Sync {
    fn is_allowed(&self, request: &AccessRequest<'_>) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grant {
    All,
    Only(&'static [Operation]),
}

impl Grant {
    fn permits(&self, operation: Operation) -> bool {
        match self {
            Grant::All => true,
            Grant::Only(ops) => ops.contains(&operation),
        }
    }
}

/// Role-based allow list with an ownership override
#[derive(Debug, Clone)]
pub struct AclPolicy {
    grants: HashMap<Role, Grant>,
}

impl Default for AclPolicy {
    fn default() -> Self {
        let mut grants = HashMap::new();
        grants.insert(Role::Admin, Grant::All);
        grants.insert(
            Role::User,
            Grant::Only(&[Operation::List, Operation::Create, Operation::Read]),
        );
        grants.insert(Role::Guest, Grant::Only(&[Operation::List, Operation::Read]));
        Self { grants }
    }
}

impl Policy for AclPolicy {
    fn is_allowed(&self, request: &AccessRequest<'_>) -> bool {
        let owns_resource = match (request.resource, request.user.id()) {
            (Some(trade), Some(user_id)) => trade.is_owned_by(user_id),
            _ => false,
        };
        if owns_resource {
            return true;
        }

        request.user.roles.iter().any(|role| {
            self.grants
                .get(role)
                .is_some_and(|grant| grant.permits(request.operation))
        })
    }
}
