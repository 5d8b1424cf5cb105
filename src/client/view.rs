//! View-model for the trades screens.
//!
//! A [`TradesView`] is never mutated in place by the controller: every
//! completed call is turned into a [`Transition`] and applied with
//! [`TradesView::apply`], which returns the next view.

use crate::database::models::{Trade, TradeId, TradeInput};
use crate::routes::RESOURCE;

/// Navigation parameters of the current screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateParams {
    pub trade_id: Option<String>,
}

/// A location path, normalized to start with `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        if path.starts_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("/{}", path))
        }
    }

    pub fn collection() -> Self {
        Self::new(RESOURCE)
    }

    pub fn detail(id: &TradeId) -> Self {
        Self::new(format!("{}/{}", RESOURCE, id))
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesView {
    /// List view
    pub trades: Vec<Trade>,
    /// Detail view
    pub trade: Option<Trade>,
    /// Create form
    pub title: String,
    pub content: String,
    /// Last failure message
    pub error: Option<String>,
    /// Last navigation target
    pub location: Option<Location>,
    pub params: StateParams,
}

/// Outcome of one completed call
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Listed(Vec<Trade>),
    Loaded(Trade),
    Created(Trade),
    Updated(TradeId),
    /// Deleted from the list view
    Removed(TradeId),
    /// Deleted from the detail view
    RemovedCurrent,
    Failed(String),
}

impl TradesView {
    pub fn with_trades(self, trades: Vec<Trade>) -> Self {
        Self { trades, ..self }
    }

    pub fn with_trade(self, trade: Trade) -> Self {
        Self {
            trade: Some(trade),
            ..self
        }
    }

    pub fn with_form(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..self
        }
    }

    pub fn with_params(self, params: StateParams) -> Self {
        Self { params, ..self }
    }

    /// The trade the create form describes
    pub fn form_input(&self) -> TradeInput {
        TradeInput::new(self.title.clone(), self.content.clone())
    }

    pub fn apply(self, transition: Transition) -> Self {
        match transition {
            Transition::Listed(trades) => Self { trades, ..self },
            Transition::Loaded(trade) => Self {
                trade: Some(trade),
                ..self
            },
            Transition::Created(trade) => Self {
                title: String::new(),
                content: String::new(),
                location: trade.id.as_ref().map(Location::detail),
                ..self
            },
            Transition::Updated(id) => Self {
                location: Some(Location::detail(&id)),
                ..self
            },
            Transition::Removed(id) => {
                let mut trades = self.trades;
                if let Some(index) = trades.iter().position(|t| t.id.as_ref() == Some(&id)) {
                    trades.remove(index);
                }
                Self { trades, ..self }
            }
            Transition::RemovedCurrent => Self {
                location: Some(Location::collection()),
                ..self
            },
            Transition::Failed(message) => Self {
                error: Some(message),
                ..self
            },
        }
    }
}
