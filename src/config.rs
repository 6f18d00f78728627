use std::env;
use std::time::Duration;

use url::Url;

use crate::error::HarnessError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Validated harness configuration. Construction is the fail-fast boundary:
/// once a `HarnessConfig` exists, the run can only fail per-case.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    base_url: Url,
    timeout: Duration,
}

impl HarnessConfig {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, HarnessError> {
        if base_url.trim().is_empty() {
            return Err(HarnessError::EmptyBaseUrl);
        }
        if timeout_secs == 0 {
            return Err(HarnessError::ZeroTimeout);
        }

        let base_url = Url::parse(base_url).map_err(|source| HarnessError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Resolve configuration from explicit CLI values with env fallbacks:
    /// PROBE_BASE_URL and PROBE_TIMEOUT_SECS.
    pub fn resolve(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, HarnessError> {
        let base_url = base_url
            .or_else(|| env::var("PROBE_BASE_URL").ok())
            .unwrap_or_default();

        let timeout_secs = timeout_secs
            .or_else(|| {
                env::var("PROBE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(&base_url, timeout_secs)
    }

    /// Join a request path onto the base URL. Paths in test cases are written
    /// with a leading slash; the base may or may not carry a trailing one.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
