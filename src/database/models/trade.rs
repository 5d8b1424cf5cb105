use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Opaque 24 hex digit trade identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(String);

impl TradeId {
    pub const LEN: usize = 24;

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..Self::LEN].to_string())
    }

    /// Accepts exactly 24 hex digits, normalised to lowercase
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == Self::LEN && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TradeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user who created a trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOwner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TradeId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TradeOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current_user_owner: Option<bool>,
}

impl Trade {
    /// A trade that has not been persisted yet
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user.as_ref().is_some_and(|owner| owner.id == user_id)
    }
}

/// Writable fields of a trade, as accepted by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl TradeInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Trim both fields; title must not be blank afterwards
    pub fn normalized(self) -> Result<Self, TradeValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(TradeValidationError::BlankTitle);
        }
        Ok(Self {
            title,
            content: self.content.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradeValidationError {
    #[error("Title cannot be blank")]
    BlankTitle,
}

impl TradeValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            TradeValidationError::BlankTitle => "title",
        }
    }
}

/// Row shape of the `trades` table
#[derive(Debug, Clone, FromRow)]
pub struct TradeRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub user_id: Option<String>,
    pub user_display_name: Option<String>,
}

impl From<TradeRow> for Trade {
    fn from(row: TradeRow) -> Self {
        let user = row.user_id.map(|id| TradeOwner {
            id,
            display_name: row.user_display_name.unwrap_or_default(),
        });
        Self {
            id: Some(TradeId(row.id)),
            title: row.title,
            content: row.content,
            created: Some(row.created),
            user,
            is_current_user_owner: None,
        }
    }
}
