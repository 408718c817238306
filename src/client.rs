use futures::future::join_all;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::parser;
use crate::request;
use crate::transport::{HttpTransport, Transport};
use crate::types::{Delivery, InteractionLogRequest, TopicResult};

pub const GENERATE_TOPIC_PATH: &str = "/generate_topic";
pub const LOG_INTERACTION_PATH: &str = "/log_interaction";

/// Client for the remote dialogue/memory service.
///
/// Every call is independent: it builds its own request, owns its own
/// buffers and shares no mutable state with other calls, so any number of
/// them can be in flight at once. Cloning is cheap.
#[derive(Clone)]
pub struct MemoryClient {
    transport: Arc<dyn Transport>,
}

impl MemoryClient {
    /// Create a client talking HTTP to the service described by `config`
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Create a client configured from `NPC_MEMORY_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    /// Create a client over any transport, e.g. a test double
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Ask the service for a topic, surfacing the reason if none comes back
    pub async fn try_generate_topic(
        &self,
        participant_a: &str,
        participant_b: &str,
    ) -> ClientResult<TopicResult> {
        let body = request::build_topic_request(participant_a, participant_b)?;
        let response = self.transport.post_json(GENERATE_TOPIC_PATH, body).await?;
        parser::parse_topic(&response)
    }

    /// Get a conversation topic for two NPCs.
    ///
    /// Never fails: any error, including a panic inside the transport, is
    /// logged and replaced with [`DEFAULT_TOPIC`](crate::DEFAULT_TOPIC).
    pub async fn generate_topic(&self, participant_a: &str, participant_b: &str) -> String {
        log::debug!("Requesting topic for {} and {}", participant_a, participant_b);

        AssertUnwindSafe(self.try_generate_topic(participant_a, participant_b))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(ClientError::Fault("transport panicked".to_string())))
            .map(|result| {
                log::info!("💬 {} & {}: {}", participant_a, participant_b, result.topic);
                result
            })
            .unwrap_or_else(|e| {
                report_failure("Error fetching topic", &e);
                TopicResult::fallback()
            })
            .topic
    }

    /// Callback flavour of [`generate_topic`](Self::generate_topic).
    /// `on_topic` runs exactly once, with either the topic or the fallback.
    pub async fn get_conversation_topic<F>(&self, participant_a: &str, participant_b: &str, on_topic: F)
    where
        F: FnOnce(String),
    {
        let topic = self.generate_topic(participant_a, participant_b).await;
        on_topic(topic);
    }

    /// Request topics for several NPC pairs concurrently.
    ///
    /// Results come back in the same order as `pairs`.
    pub async fn generate_topics<I, A, B>(&self, pairs: I) -> Vec<String>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let pairs: Vec<(A, B)> = pairs.into_iter().collect();
        log::debug!("Requesting topics for {} pairs in parallel", pairs.len());

        let topic_futures = pairs
            .iter()
            .map(|(a, b)| self.generate_topic(a.as_ref(), b.as_ref()));

        join_all(topic_futures).await
    }

    /// Report a finished conversation, surfacing the reason if it wasn't stored
    pub async fn try_log_interaction(&self, interaction: &InteractionLogRequest) -> ClientResult<()> {
        let body = request::encode_log_request(interaction)?;
        self.transport
            .post_json_status_only(LOG_INTERACTION_PATH, body)
            .await
    }

    /// Best-effort interaction logging.
    ///
    /// Failures are logged and reported through [`Delivery::Dropped`]; they
    /// are never raised to the caller.
    pub async fn log_interaction(&self, interaction: &InteractionLogRequest) -> Delivery {
        let outcome = AssertUnwindSafe(self.try_log_interaction(interaction))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(ClientError::Fault("transport panicked".to_string())));

        match &outcome {
            Ok(()) => log::debug!(
                "Logged interaction between {} and {}",
                interaction.participant_a,
                interaction.participant_b
            ),
            Err(e) => report_failure("Error logging interaction", e),
        }

        outcome.into()
    }

    /// Log an interaction in the background without waiting for it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_log_interaction(&self, interaction: InteractionLogRequest) -> JoinHandle<Delivery> {
        let client = self.clone();
        tokio::spawn(async move { client.log_interaction(&interaction).await })
    }
}

fn report_failure(context: &str, error: &ClientError) {
    log::error!("{}: {}", context, error);
    if let Some(body) = error.response_body() {
        log::error!("Server response: {}", body);
    }
}
