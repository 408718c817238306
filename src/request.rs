//! Turns typed inputs into the JSON bodies the service expects.
//!
//! Inputs are checked before anything is serialised, so a malformed request
//! is never put on the wire.

use crate::error::{ClientError, ClientResult};
use crate::types::{InteractionLogRequest, TopicRequest};

/// Build the body for `POST /generate_topic`
pub fn build_topic_request(participant_a: &str, participant_b: &str) -> ClientResult<Vec<u8>> {
    encode_topic_request(&TopicRequest::new(participant_a, participant_b))
}

/// Build the body for `POST /log_interaction`
pub fn build_log_request(
    participant_a: &str,
    participant_b: &str,
    topic: &str,
    summary: &str,
    tone: &str,
    impact: f32,
) -> ClientResult<Vec<u8>> {
    let request = InteractionLogRequest::new(participant_a, participant_b, topic)
        .with_summary(summary)
        .with_tone(tone)
        .with_impact(impact);
    encode_log_request(&request)
}

pub fn encode_topic_request(request: &TopicRequest) -> ClientResult<Vec<u8>> {
    validate_participants(&request.participant_a, &request.participant_b)?;
    Ok(serde_json::to_vec(request)?)
}

pub fn encode_log_request(request: &InteractionLogRequest) -> ClientResult<Vec<u8>> {
    validate_participants(&request.participant_a, &request.participant_b)?;

    // serde_json would quietly write `null` for these
    if !request.impact.is_finite() {
        return Err(ClientError::InvalidInput(format!(
            "impact must be a finite number, got {}",
            request.impact
        )));
    }

    Ok(serde_json::to_vec(request)?)
}

fn validate_participants(participant_a: &str, participant_b: &str) -> ClientResult<()> {
    for (label, id) in [("npc1_id", participant_a), ("npc2_id", participant_b)] {
        if id.trim().is_empty() {
            return Err(ClientError::InvalidInput(format!("{} must not be empty", label)));
        }
    }
    Ok(())
}
