//! Storage client configuration.
//!
//! The storage origin is not configured here: every request targets the
//! origin of the resolved space it writes to.

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after a failed transport attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP behaviour of a [`StorageClient`](crate::StorageClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after a transport failure. HTTP error statuses are never retried.
    pub max_retries: u32,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: default_user_agent(),
        }
    }
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `WASP_TIMEOUT_SECS` (default: 30)
    /// - `WASP_MAX_RETRIES` (default: 3)
    /// - `WASP_USER_AGENT` (default: `wasp/<version>`)
    ///
    /// Unparseable numbers fall back to the default.
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env_parse("WASP_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS),
            max_retries: env_parse("WASP_MAX_RETRIES").unwrap_or(DEFAULT_MAX_RETRIES),
            user_agent: std::env::var("WASP_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        }
    }

    /// Short timeout and no retries, for tests against a local mock server.
    pub fn local_mock() -> Self {
        Self {
            timeout_secs: 5,
            max_retries: 0,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("wasp/{}", env!("CARGO_PKG_VERSION"))
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    std::env::var(var).ok().and_then(|s| s.trim().parse().ok())
}
