//! Client configuration.

use std::time::Duration;

use crate::error::ApiError;
use crate::transport::DEFAULT_USER_AGENT;

pub const ENV_BASE_URL: &str = "ECX_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "ECX_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "ECX_TIMEOUT_SECS";

/// Settings used by `EcxClient::from_config`.
///
/// `page_size` is sent unchanged on every list page request; when unset the
/// parameter is omitted and the server default applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: Option<u32>,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            page_size: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Read `ECX_BASE_URL` (required), `ECX_PAGE_SIZE` and `ECX_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::PreconditionError(format!("{ENV_BASE_URL} is not set")))?;
        let mut config = Self::new(base_url.trim());

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let size = raw.trim().parse::<u32>().map_err(|e| {
                ApiError::PreconditionError(format!("invalid {ENV_PAGE_SIZE} '{raw}': {e}"))
            })?;
            config = config.page_size(size);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                ApiError::PreconditionError(format!("invalid {ENV_TIMEOUT_SECS} '{raw}': {e}"))
            })?;
            config = config.timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
