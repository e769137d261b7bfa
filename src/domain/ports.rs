use crate::domain::model::JokeResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> Result<SocketAddr>;
    fn upstream_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

/// Something that can produce one joke per call.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_joke(&self) -> Result<JokeResponse>;
}
