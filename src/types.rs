use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Topic handed to the simulation whenever the service can't supply one
pub const DEFAULT_TOPIC: &str = "General conversation";

/// Asks the service for a conversation topic between two NPCs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRequest {
    #[serde(rename = "npc1_id")]
    pub participant_a: String,
    #[serde(rename = "npc2_id")]
    pub participant_b: String,
}

impl TopicRequest {
    pub fn new(participant_a: impl Into<String>, participant_b: impl Into<String>) -> Self {
        Self {
            participant_a: participant_a.into(),
            participant_b: participant_b.into(),
        }
    }
}

/// Topic returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResult {
    pub topic: String,
}

impl TopicResult {
    /// The safe default used on any failure
    pub fn fallback() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

/// Outcome of a finished conversation, reported for persistent storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionLogRequest {
    #[serde(rename = "npc1_id")]
    pub participant_a: String,
    #[serde(rename = "npc2_id")]
    pub participant_b: String,
    pub topic: String,
    #[serde(rename = "conversation_summary")]
    pub summary: String,
    pub emotional_tone: String,
    /// Unbounded here; the server owns the range policy
    pub impact: f32,
}

impl InteractionLogRequest {
    /// Creates a log entry with an empty summary, a neutral tone and zero impact
    pub fn new(
        participant_a: impl Into<String>,
        participant_b: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            participant_a: participant_a.into(),
            participant_b: participant_b.into(),
            topic: topic.into(),
            summary: String::new(),
            emotional_tone: "neutral".to_string(),
            impact: 0.0,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.emotional_tone = tone.into();
        self
    }

    pub fn with_impact(mut self, impact: f32) -> Self {
        self.impact = impact;
        self
    }
}

/// What happened to a best-effort interaction log.
///
/// Logging is non-critical telemetry, so nothing forces the caller to look
/// at this; it exists so the failure path stays observable.
#[derive(Debug)]
pub enum Delivery {
    Delivered,
    Dropped(ClientError),
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered)
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Delivery::Delivered => None,
            Delivery::Dropped(e) => Some(e),
        }
    }
}

impl From<Result<(), ClientError>> for Delivery {
    fn from(result: Result<(), ClientError>) -> Self {
        match result {
            Ok(()) => Delivery::Delivered,
            Err(e) => Delivery::Dropped(e),
        }
    }
}
