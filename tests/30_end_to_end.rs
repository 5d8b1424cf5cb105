mod common;

use anyhow::Result;

use common::TestServer;
use trades_api::auth::Role;
use trades_api::client::{StateParams, TradesClient, TradesController};

#[tokio::test]
async fn controller_drives_the_real_api() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token("alice", &[Role::User]);
    let mut controller = TradesController::new(TradesClient::new(&server.base_url)?.with_token(token));

    // Create from the form
    controller.update_view(|view| view.with_form("An Trade about MEAN", "MEAN rocks!"));
    let location = controller
        .create()
        .await?
        .location
        .clone()
        .expect("create navigates");
    let id = location
        .path()
        .strip_prefix("/trades/")
        .expect("detail location")
        .to_string();

    // List shows it
    let view = controller.find().await?;
    assert_eq!(view.trades.len(), 1);
    assert_eq!(view.trades[0].title, "An Trade about MEAN");

    // Load, edit, save
    controller.update_view(|view| view.with_params(StateParams { trade_id: Some(id.clone()) }));
    controller.find_one().await?;
    controller.update_view(|view| {
        let mut trade = view.trade.clone().expect("trade loaded");
        trade.title = "Edited".to_string();
        view.with_trade(trade)
    });
    let view = controller.update().await?;
    assert_eq!(view.location.as_ref().map(|l| l.path().to_string()), Some(format!("/trades/{}", id)));

    // The server stored the edit
    let view = controller.find_one().await?;
    let stored = view.trade.as_ref().expect("trade reloaded");
    assert_eq!(stored.title, "Edited");
    assert_eq!(stored.content, "MEAN rocks!");
    let view = controller.find().await?;
    assert_eq!(view.trades[0].title, "Edited");

    // Delete from the detail view
    let view = controller.remove(None).await?;
    assert_eq!(view.location.as_ref().map(|l| l.path()), Some("/trades"));

    let view = controller.find().await?;
    assert!(view.trades.is_empty());
    Ok(())
}

#[tokio::test]
async fn guest_create_surfaces_server_message() -> Result<()> {
    let server = TestServer::spawn().await?;
    let mut controller = TradesController::new(TradesClient::new(&server.base_url)?);

    controller.update_view(|view| view.with_form("t", "c"));
    assert!(controller.create().await.is_err());

    assert_eq!(controller.view().error.as_deref(), Some("User is not authorized"));
    assert_eq!(controller.view().title, "t");
    Ok(())
}
