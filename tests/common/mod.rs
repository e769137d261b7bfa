#![allow(dead_code)]

use dadjoke_relay::{build_router, AppState, JokeClient, TomlConfig};
use std::net::SocketAddr;

pub const TEST_USER_AGENT: &str = "dadjoke-relay-tests/1.0";

pub fn upstream_config(url: String, timeout_seconds: u64) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.upstream.url = url;
    config.upstream.timeout_seconds = timeout_seconds;
    config.upstream.user_agent = TEST_USER_AGENT.to_string();
    config
}

/// Starts the relay on an ephemeral port and returns its address.
pub async fn spawn_relay(config: &TomlConfig) -> SocketAddr {
    let client = JokeClient::new(config).unwrap();
    let router = build_router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        dadjoke_relay::server::serve(listener, router, std::future::pending())
            .await
            .unwrap();
    });

    addr
}
