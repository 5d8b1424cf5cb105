use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Trade, TradeId, TradeInput, TradeOwner, TradeRow};

/// Resource access for trades. Inputs reaching the store are already validated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// All trades, newest first
    async fn list(&self) -> Result<Vec<Trade>, DatabaseError>;
    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, DatabaseError>;
    async fn create(&self, input: TradeInput, owner: Option<TradeOwner>) -> Result<Trade, DatabaseError>;
    /// Replace title and content; identifier, created and owner are kept
    async fn update(&self, id: &TradeId, input: TradeInput) -> Result<Trade, DatabaseError>;
    async fn delete(&self, id: &TradeId) -> Result<(), DatabaseError>;
    async fn health_check(&self) -> Result<(), DatabaseError>;
}

const SELECT_COLUMNS: &str = "id, title, content, created, user_id, user_display_name";

pub struct PgTradeRepository {
    pool: PgPool,
}

impl PgTradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TradeRepository for PgTradeRepository {
    async fn list(&self) -> Result<Vec<Trade>, DatabaseError> {
        let sql = format!("SELECT {} FROM trades ORDER BY created DESC", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, TradeRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Trade::from).collect())
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, DatabaseError> {
        let sql = format!("SELECT {} FROM trades WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, TradeRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Trade::from))
    }

    async fn create(&self, input: TradeInput, owner: Option<TradeOwner>) -> Result<Trade, DatabaseError> {
        let sql = format!(
            "INSERT INTO trades (id, title, content, created, user_id, user_display_name) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            SELECT_COLUMNS
        );
        let (user_id, display_name) = match owner {
            Some(owner) => (Some(owner.id), Some(owner.display_name)),
            None => (None, None),
        };
        let row = sqlx::query_as::<_, TradeRow>(&sql)
            .bind(TradeId::generate().as_str())
            .bind(&input.title)
            .bind(&input.content)
            .bind(Utc::now())
            .bind(user_id)
            .bind(display_name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: &TradeId, input: TradeInput) -> Result<Trade, DatabaseError> {
        let sql = format!(
            "UPDATE trades SET title = $2, content = $3 WHERE id = $1 RETURNING {}",
            SELECT_COLUMNS
        );
        sqlx::query_as::<_, TradeRow>(&sql)
            .bind(id.as_str())
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(&self.pool)
            .await?
            .map(Trade::from)
            .ok_or_else(|| DatabaseError::NotFound(format!("trade {}", id)))
    }

    async fn delete(&self, id: &TradeId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM trades WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("trade {}", id)));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
