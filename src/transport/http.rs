use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::Transport;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP transport backed by reqwest.
///
/// Idle connections are never kept, so every call opens its own connection
/// and drops it when the call finishes, whichever way it finishes.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client, config })
    }

    async fn send_once(&self, url: &str, body: Vec<u8>) -> ClientResult<reqwest::Response> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> ClientResult<Vec<u8>> {
        let url = self.config.endpoint(path);
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            log::debug!("POST {} (attempt {}/{})", url, attempt, max_attempts);

            let result = match self.send_once(&url, body.clone()).await {
                Ok(response) => response
                    .bytes()
                    .await
                    .map(|bytes| bytes.to_vec())
                    .map_err(ClientError::from),
                Err(e) => Err(e),
            };

            match result {
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    log::warn!("Request to {} failed, retrying: {}", url, e);
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn post_json_status_only(&self, path: &str, body: Vec<u8>) -> ClientResult<()> {
        let url = self.config.endpoint(path);
        log::debug!("POST {}", url);

        // Dropping the response closes the connection without reading the body
        self.send_once(&url, body).await.map(drop)
    }
}
