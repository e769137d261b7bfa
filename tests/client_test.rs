mod common;

use anyhow::Result;
use common::{upstream_config, TEST_USER_AGENT};
use dadjoke_relay::{JokeClient, JokeSource, RelayError};
use httpmock::prelude::*;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_fetch_joke_sends_json_accept_and_user_agent() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/")
                .header("Accept", "application/json")
                .header("User-Agent", TEST_USER_AGENT);
            then.status(200).json_body(serde_json::json!({
                "id": "R7UfaahVfFd",
                "joke": "I'm reading a book about anti-gravity. It's impossible to put down.",
                "status": 200
            }));
        })
        .await;

    let client = JokeClient::new(&upstream_config(server.url("/"), 5))?;
    let joke = client.fetch_joke().await?;

    api_mock.assert_async().await;
    assert_eq!(
        joke.joke.as_deref(),
        Some("I'm reading a book about anti-gravity. It's impossible to put down.")
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_joke_field_is_none() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .json_body(serde_json::json!({ "id": "abc", "status": 200 }));
        })
        .await;

    let client = JokeClient::new(&upstream_config(server.url("/"), 5))?;
    let joke = client.fetch_joke().await?;

    assert_eq!(joke.joke, None);
    Ok(())
}

#[tokio::test]
async fn test_upstream_error_status_is_reported() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(503);
        })
        .await;

    let client = JokeClient::new(&upstream_config(server.url("/"), 5))?;
    let err = client.fetch_joke().await.unwrap_err();

    assert!(matches!(err, RelayError::UpstreamStatus { status: 503 }));
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html><body>not json</body></html>");
        })
        .await;

    let client = JokeClient::new(&upstream_config(server.url("/"), 5))?;
    let err = client.fetch_joke().await.unwrap_err();

    match err {
        RelayError::ApiError(e) => assert!(e.is_decode()),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_slow_upstream_times_out() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(serde_json::json!({ "joke": "too late" }));
        })
        .await;

    let client = JokeClient::new(&upstream_config(server.url("/"), 1))?;
    let started = Instant::now();
    let err = client.fetch_joke().await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(4));
    match err {
        RelayError::ApiError(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_every_call_hits_upstream() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .json_body(serde_json::json!({ "joke": "same joke" }));
        })
        .await;

    let client = JokeClient::new(&upstream_config(server.url("/"), 5))?;
    for _ in 0..3 {
        client.fetch_joke().await?;
    }

    api_mock.assert_hits_async(3).await;
    Ok(())
}
