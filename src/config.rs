use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::time::Duration;

/// Default local deployment of the memory service
pub const DEFAULT_BASE_URL: &str =
    "http://localhost:10000/projects/NPC-memory-storage/applications/TOPIC";

pub const ENV_BASE_URL: &str = "NPC_MEMORY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "NPC_MEMORY_TIMEOUT_SECS";
pub const ENV_MAX_ATTEMPTS: &str = "NPC_MEMORY_MAX_ATTEMPTS";
pub const ENV_USER_AGENT: &str = "NPC_MEMORY_USER_AGENT";

/// Connection settings for the dialogue/memory service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host, port and path prefix; endpoint paths are appended to it
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total tries per call, including the first
    pub max_attempts: u32,
    /// Delay before retry `n` is `retry_backoff * n`
    pub retry_backoff: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 1,
            retry_backoff: Duration::from_millis(200),
            user_agent: format!("social_npc_link/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with everything else defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Defaults overridden by `NPC_MEMORY_*` environment variables.
    ///
    /// Reads:
    /// - `NPC_MEMORY_BASE_URL`
    /// - `NPC_MEMORY_TIMEOUT_SECS`
    /// - `NPC_MEMORY_MAX_ATTEMPTS`
    /// - `NPC_MEMORY_USER_AGENT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(attempts) = lookup(ENV_MAX_ATTEMPTS) {
            let attempts: u32 = attempts
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer", ENV_MAX_ATTEMPTS))?;
            config = config.with_max_attempts(attempts);
        }

        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config = config.with_user_agent(user_agent);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Values below 1 are treated as 1.
    ///
    /// Only topic requests are retried. Interaction logs are always sent
    /// once, since the server may have stored a request that timed out.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid service base URL: {}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Service base URL must use http or https: {}", self.base_url);
        }
        Ok(())
    }

    /// Full URL for an endpoint path such as `/generate_topic`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
