use crate::error::{ClientError, ClientResult};
use crate::types::TopicResult;

/// Parse a `/generate_topic` response body.
///
/// Anything that isn't `{"topic": "<non-blank string>"}` is an error; the
/// caller decides whether that becomes the fallback topic. A valid topic is
/// returned exactly as the server sent it.
pub fn parse_topic(body: &[u8]) -> ClientResult<TopicResult> {
    let result: TopicResult = serde_json::from_slice(body).map_err(|e| {
        ClientError::Deserialize(format!(
            "{} in body: {}",
            e,
            String::from_utf8_lossy(body)
        ))
    })?;

    if result.topic.trim().is_empty() {
        return Err(ClientError::Deserialize("topic is empty".to_string()));
    }

    Ok(result)
}
