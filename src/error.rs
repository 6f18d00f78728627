// Harness error types
use thiserror::Error;

/// Fatal harness misconfiguration. Everything else that goes wrong during a
/// run is captured into a `TestResult` and never propagates past the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("per-request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Why a probe did not come back clean. Recorded on FAIL and WARN results
/// so sinks can group failures without string-matching the detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Endpoint returned a status outside both accepted sets (non-5xx).
    Validation,
    /// Endpoint returned an unexpected 5xx.
    Server,
    /// Timeout, connection refused, DNS failure.
    Network,
    /// Body was not JSON, or not the JSON the predicate wanted.
    Parse,
}

impl FailureKind {
    /// Classify an unexpected status code.
    pub fn for_status(status: u16) -> Self {
        if (500..600).contains(&status) {
            FailureKind::Server
        } else {
            FailureKind::Validation
        }
    }
}
