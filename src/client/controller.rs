use crate::client::api::{ClientError, TradesClient};
use crate::client::view::{TradesView, Transition};
use crate::database::models::{Trade, TradeId};

/// Drives the trades view over HTTP.
///
/// Each operation takes `&mut self`, so a controller has at most one call in
/// flight. The view is left untouched until the call completes; then exactly
/// one transition is applied, success or failure.
pub struct TradesController {
    client: TradesClient,
    view: TradesView,
}

impl TradesController {
    pub fn new(client: TradesClient) -> Self {
        Self {
            client,
            view: TradesView::default(),
        }
    }

    pub fn view(&self) -> &TradesView {
        &self.view
    }

    /// Replace the view through a pure function, e.g. when the user edits the
    /// form or navigates
    pub fn update_view(&mut self, f: impl FnOnce(TradesView) -> TradesView) {
        let view = std::mem::take(&mut self.view);
        self.view = f(view);
    }

    /// Load the list view
    pub async fn find(&mut self) -> Result<&TradesView, ClientError> {
        let result = self.client.list().await.map(Transition::Listed);
        self.settle(result)
    }

    /// Load the detail view for the trade named in the navigation params
    pub async fn find_one(&mut self) -> Result<&TradesView, ClientError> {
        let id = self
            .view
            .params
            .trade_id
            .as_deref()
            .and_then(TradeId::parse)
            .ok_or(ClientError::MissingId);

        let result = match id {
            Ok(id) => self.client.get(&id).await.map(Transition::Loaded),
            Err(e) => Err(e),
        };
        self.settle(result)
    }

    /// Submit the create form
    pub async fn create(&mut self) -> Result<&TradesView, ClientError> {
        let input = self.view.form_input();
        let result = self.client.create(&input).await.map(Transition::Created);
        self.settle(result)
    }

    /// Save the loaded trade with its current fields
    pub async fn update(&mut self) -> Result<&TradesView, ClientError> {
        let result = match self.view.trade.clone() {
            Some(trade) => match trade.id.clone() {
                Some(id) => self.client.update(&trade).await.map(|_| Transition::Updated(id)),
                None => Err(ClientError::MissingId),
            },
            None => Err(ClientError::MissingId),
        };
        self.settle(result)
    }

    /// Delete `trade` from the list view, or the loaded trade when `None`
    pub async fn remove(&mut self, trade: Option<&Trade>) -> Result<&TradesView, ClientError> {
        let result = match trade {
            Some(trade) => match trade.id.clone() {
                Some(id) => self
                    .client
                    .delete(&id)
                    .await
                    .map(|_| Transition::Removed(id)),
                None => Err(ClientError::MissingId),
            },
            None => match self.view.trade.as_ref().and_then(|t| t.id.clone()) {
                Some(id) => self
                    .client
                    .delete(&id)
                    .await
                    .map(|_| Transition::RemovedCurrent),
                None => Err(ClientError::MissingId),
            },
        };
        self.settle(result)
    }

    fn settle(&mut self, result: Result<Transition, ClientError>) -> Result<&TradesView, ClientError> {
        match result {
            Ok(transition) => {
                self.update_view(|view| view.apply(transition));
                Ok(&self.view)
            }
            Err(e) => {
                tracing::debug!("Trades call failed: {}", e);
                self.update_view(|view| view.apply(Transition::Failed(e.message())));
                Err(e)
            }
        }
    }
}
