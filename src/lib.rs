//! # Social NPC Link
//!
//! Async client connecting an NPC interaction simulation to a remote
//! dialogue/memory service.
//!
//! ## Features
//!
//! - **Topic generation**: ask the service what two NPCs should talk about,
//!   always getting *some* topic back
//! - **Interaction logging**: report how a conversation went (summary, tone,
//!   impact) on a best-effort basis
//! - **Safe fallbacks**: transport, HTTP and parse failures become the default
//!   topic or a logged diagnostic, never an error in the simulation
//! - **Concurrent requests**: calls share no state and can run side by side
//!
//! ## Example
//!
//! ```rust,no_run
//! use social_npc_link::{ClientConfig, InteractionLogRequest, MemoryClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = MemoryClient::new(ClientConfig::new("http://localhost:10000/npc-memory"))?;
//!
//! // Falls back to "General conversation" if the service is unavailable
//! let topic = client.generate_topic("npc_001", "npc_002").await;
//!
//! // Fire and forget
//! client.spawn_log_interaction(
//!     InteractionLogRequest::new("npc_001", "npc_002", topic)
//!         .with_summary("Swapped stories about the harvest")
//!         .with_tone("cheerful")
//!         .with_impact(0.4),
//! );
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{MemoryClient, GENERATE_TOPIC_PATH, LOG_INTERACTION_PATH};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use request::{build_log_request, build_topic_request};
pub use transport::{HttpTransport, Transport};
pub use types::{Delivery, InteractionLogRequest, TopicRequest, TopicResult, DEFAULT_TOPIC};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
