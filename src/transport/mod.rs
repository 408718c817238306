pub mod http;

use async_trait::async_trait;

use crate::error::ClientResult;

/// Sends one JSON request to the service and hands back the raw response body.
///
/// Implementations own whatever connection resources a call needs and must
/// release them when the returned future completes or is dropped.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `path` (e.g. `/generate_topic`) relative to the service base URL
    async fn post_json(&self, path: &str, body: Vec<u8>) -> ClientResult<Vec<u8>>;

    /// POST where only the status matters.
    ///
    /// Made exactly once and the response body is left unread: the request
    /// may not be idempotent, and a body that fails to arrive says nothing
    /// about whether the server accepted it.
    async fn post_json_status_only(&self, path: &str, body: Vec<u8>) -> ClientResult<()> {
        self.post_json(path, body).await.map(|_| ())
    }
}

pub use http::HttpTransport;
