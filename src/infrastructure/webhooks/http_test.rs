use std::time::Duration;

use anyhow::Result;
use mockito::Matcher;
use test_utils::stylist_reply_fixture;
use test_utils::webhook_reply_body;

use super::HttpWebhook;
use crate::domain::models::ExchangeError;
use crate::domain::models::RequestContext;
use crate::domain::models::Webhook;
use crate::domain::models::WebhookRequest;

fn request(message: &str) -> WebhookRequest {
    let context = RequestContext {
        user_agent: "classicmode/0.1.0 (linux; x86_64)".to_string(),
        referrer: "".to_string(),
        page: "/".to_string(),
    };

    return WebhookRequest::new(message, "5f0c2d6a-1b7e-4c8e-9a51-0d3f8a6b2e11", &context);
}

fn webhook(url: &str) -> Result<HttpWebhook> {
    return HttpWebhook::new(url, Duration::from_millis(500));
}

#[tokio::test]
async fn it_posts_the_chat_payload() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/chat")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "message": "Do you have the blazer in navy?",
            "sessionId": "5f0c2d6a-1b7e-4c8e-9a51-0d3f8a6b2e11",
            "userAgent": "classicmode/0.1.0 (linux; x86_64)",
            "referrer": "direct",
            "page": "/",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(webhook_reply_body(stylist_reply_fixture()))
        .create_async()
        .await;

    let url = format!("{}/webhook/chat", server.url());
    let res = webhook(&url)?
        .send(&request("Do you have the blazer in navy?"))
        .await;

    mock.assert_async().await;
    assert_eq!(res, Ok(Some(stylist_reply_fixture().to_string())));

    return Ok(());
}

#[tokio::test]
async fn it_returns_none_without_output() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"message":"Workflow was started"}"#)
        .create_async()
        .await;

    let res = webhook(&server.url())?.send(&request("Hello")).await;

    mock.assert_async().await;
    assert_eq!(res, Ok(None));

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_status() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body(webhook_reply_body("should be ignored"))
        .create_async()
        .await;

    let res = webhook(&server.url())?.send(&request("Hello")).await;

    mock.assert_async().await;
    assert_eq!(res, Err(ExchangeError::Status(500)));

    return Ok(());
}

#[tokio::test]
async fn it_sends_exactly_once_on_failure() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let res = webhook(&server.url())?.send(&request("Hello")).await;

    mock.assert_async().await;
    assert!(res.is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_when_unreachable() -> Result<()> {
    // Nothing listens on port 9 (discard) on test machines.
    let res = webhook("http://127.0.0.1:9/webhook")?
        .send(&request("Hello"))
        .await;

    assert!(matches!(res, Err(ExchangeError::Transport(_))));

    return Ok(());
}
