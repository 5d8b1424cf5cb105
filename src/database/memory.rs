use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Trade, TradeId, TradeInput, TradeOwner};
use crate::database::repository::TradeRepository;

/// Process-local trade store, kept in insertion order
#[derive(Default)]
pub struct MemoryTradeRepository {
    trades: RwLock<Vec<Trade>>,
}

impl MemoryTradeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TradeRepository for MemoryTradeRepository {
    async fn list(&self) -> Result<Vec<Trade>, DatabaseError> {
        let trades = self.trades.read().await;
        let mut listed = trades.clone();
        // Stable, so equal timestamps keep newest-inserted first after the reverse
        listed.reverse();
        listed.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(listed)
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, DatabaseError> {
        let trades = self.trades.read().await;
        Ok(trades.iter().find(|t| t.id.as_ref() == Some(id)).cloned())
    }

    async fn create(&self, input: TradeInput, owner: Option<TradeOwner>) -> Result<Trade, DatabaseError> {
        let trade = Trade {
            id: Some(TradeId::generate()),
            title: input.title,
            content: input.content,
            created: Some(Utc::now()),
            user: owner,
            is_current_user_owner: None,
        };
        self.trades.write().await.push(trade.clone());
        Ok(trade)
    }

    async fn update(&self, id: &TradeId, input: TradeInput) -> Result<Trade, DatabaseError> {
        let mut trades = self.trades.write().await;
        let trade = trades
            .iter_mut()
            .find(|t| t.id.as_ref() == Some(id))
            .ok_or_else(|| DatabaseError::NotFound(format!("trade {}", id)))?;
        trade.title = input.title;
        trade.content = input.content;
        Ok(trade.clone())
    }

    async fn delete(&self, id: &TradeId) -> Result<(), DatabaseError> {
        let mut trades = self.trades.write().await;
        let position = trades
            .iter()
            .position(|t| t.id.as_ref() == Some(id))
            .ok_or_else(|| DatabaseError::NotFound(format!("trade {}", id)))?;
        trades.remove(position);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
