//! Client controller behaviour against a mocked HTTP backend.

use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trades_api::client::{ClientError, Location, StateParams, TradesClient, TradesController};
use trades_api::database::models::{Trade, TradeId};

const TRADE_ID: &str = "525a8422f6d0f87f0e407a33";
const ITEM_PATH: &str = r"^/api/trades/([0-9a-fA-F]{24})$";

fn mock_trade() -> Trade {
    Trade {
        id: TradeId::parse(TRADE_ID),
        ..Trade::draft("An Trade about MEAN", "MEAN rocks!")
    }
}

async fn controller_for(server: &MockServer) -> Result<TradesController> {
    Ok(TradesController::new(TradesClient::new(&server.uri())?))
}

#[tokio::test]
async fn find_fetches_the_trade_list() -> Result<()> {
    let server = MockServer::start().await;
    let sample_trades = vec![mock_trade()];
    Mock::given(method("GET"))
        .and(path("/api/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&sample_trades))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    controller.find().await?;

    assert_eq!(controller.view().trades, sample_trades);
    Ok(())
}

#[tokio::test]
async fn find_keeps_the_order_the_server_returned() -> Result<()> {
    let server = MockServer::start().await;
    let other = Trade {
        id: TradeId::parse("aaaaaaaaaaaaaaaaaaaaaaaa"),
        ..Trade::draft("Another", "")
    };
    let sample_trades = vec![other, mock_trade()];
    Mock::given(method("GET"))
        .and(path("/api/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&sample_trades))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    let view = controller.find().await?;

    assert_eq!(view.trades, sample_trades);
    Ok(())
}

#[tokio::test]
async fn find_one_fetches_the_trade_named_in_params() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(ITEM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_trade()))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    controller.update_view(|view| {
        view.with_params(StateParams {
            trade_id: Some(TRADE_ID.to_string()),
        })
    });
    controller.find_one().await?;

    assert_eq!(controller.view().trade, Some(mock_trade()));
    Ok(())
}

#[tokio::test]
async fn find_one_without_params_sets_error_and_sends_nothing() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    let result = controller.find_one().await;

    assert!(matches!(result, Err(ClientError::MissingId)));
    assert_eq!(controller.view().error.as_deref(), Some("trade has no identifier"));
    Ok(())
}

mod create {
    use super::*;

    fn sample_post_data() -> serde_json::Value {
        json!({ "title": "An Trade about MEAN", "content": "MEAN rocks!" })
    }

    async fn controller_with_form(server: &MockServer) -> Result<TradesController> {
        let mut controller = controller_for(server).await?;
        controller.update_view(|view| view.with_form("An Trade about MEAN", "MEAN rocks!"));
        Ok(controller)
    }

    #[tokio::test]
    async fn posts_form_values_then_locates_to_new_trade() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/trades"))
            .and(body_json(sample_post_data()))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_trade()))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_with_form(&server).await?;
        let view = controller.create().await?;

        // Form inputs are reset
        assert_eq!(view.title, "");
        assert_eq!(view.content, "");

        // Redirected to the new trade
        assert_eq!(view.location, Some(Location::new(format!("trades/{}", TRADE_ID))));
        Ok(())
    }

    #[tokio::test]
    async fn sets_error_if_save_fails() -> Result<()> {
        let server = MockServer::start().await;
        let error_message = "this is an error message";
        Mock::given(method("POST"))
            .and(path("/api/trades"))
            .and(body_json(sample_post_data()))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": error_message })))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_with_form(&server).await?;
        let result = controller.create().await;

        assert!(matches!(result, Err(ClientError::Api { .. })));
        let view = controller.view();
        assert_eq!(view.error.as_deref(), Some(error_message));
        assert_eq!(view.title, "An Trade about MEAN");
        assert_eq!(view.content, "MEAN rocks!");
        assert_eq!(view.location, None);
        Ok(())
    }
}

mod update {
    use super::*;

    async fn controller_with_trade(server: &MockServer) -> Result<TradesController> {
        let mut controller = controller_for(server).await?;
        controller.update_view(|view| view.with_trade(mock_trade()));
        Ok(controller)
    }

    #[tokio::test]
    async fn updates_a_valid_trade() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/trades/{}", TRADE_ID)))
            .and(body_partial_json(json!({
                "_id": TRADE_ID,
                "title": "An Trade about MEAN",
                "content": "MEAN rocks!",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_with_trade(&server).await?;
        let view = controller.update().await?;

        let location = view.location.as_ref().map(|l| l.path().to_string());
        assert_eq!(location, Some(format!("/trades/{}", TRADE_ID)));
        Ok(())
    }

    #[tokio::test]
    async fn sends_the_edited_fields() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/trades/{}", TRADE_ID)))
            .and(body_partial_json(json!({
                "_id": TRADE_ID,
                "title": "Edited",
                "content": "Still MEAN",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": TRADE_ID })))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_with_trade(&server).await?;
        controller.update_view(|view| {
            let mut trade = mock_trade();
            trade.title = "Edited".to_string();
            trade.content = "Still MEAN".to_string();
            view.with_trade(trade)
        });
        controller.update().await?;

        assert_eq!(controller.view().error, None);
        Ok(())
    }

    #[tokio::test]
    async fn sets_error_to_response_message() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path_regex(ITEM_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "error" })))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_with_trade(&server).await?;
        assert!(controller.update().await.is_err());

        assert_eq!(controller.view().error.as_deref(), Some("error"));
        assert_eq!(controller.view().location, None);
        Ok(())
    }
}

#[tokio::test]
async fn remove_with_trade_drops_it_from_the_list() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path_regex(ITEM_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    controller.update_view(|view| view.with_trades(vec![mock_trade(), Trade::default()]));

    let trade = mock_trade();
    let view = controller.remove(Some(&trade)).await?;

    assert_eq!(view.trades.len(), 1);
    assert_eq!(view.trades, vec![Trade::default()]);
    assert_eq!(view.location, None);
    Ok(())
}

#[tokio::test]
async fn remove_failure_keeps_the_list() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path_regex(ITEM_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "User is not authorized" })))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    controller.update_view(|view| view.with_trades(vec![mock_trade(), Trade::default()]));

    let trade = mock_trade();
    assert!(controller.remove(Some(&trade)).await.is_err());

    assert_eq!(controller.view().trades.len(), 2);
    assert_eq!(controller.view().error.as_deref(), Some("User is not authorized"));
    Ok(())
}

#[tokio::test]
async fn remove_without_trade_redirects_to_trades() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path_regex(ITEM_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await?;
    controller.update_view(|view| view.with_trade(mock_trade()));
    let view = controller.remove(None).await?;

    assert_eq!(view.location, Some(Location::new("trades")));
    Ok(())
}
