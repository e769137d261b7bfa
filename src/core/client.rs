use crate::core::{ConfigProvider, JokeResponse, JokeSource, Result};
use crate::utils::error::RelayError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Outbound wrapper around one shared `reqwest::Client`.
///
/// Every call to [`JokeSource::fetch_joke`] issues exactly one GET to the
/// configured URL. Nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct JokeClient {
    client: Client,
    endpoint: String,
}

impl JokeClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        // icanhazdadjoke answers with HTML unless JSON is asked for
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::with_client(client, config.upstream_url()))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl JokeSource for JokeClient {
    async fn fetch_joke(&self) -> Result<JokeResponse> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let joke: JokeResponse = response.json().await?;
        if joke.joke.is_none() {
            tracing::warn!("Upstream response had no joke field");
        }

        Ok(joke)
    }
}
