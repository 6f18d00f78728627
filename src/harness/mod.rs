pub mod classify;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::HarnessConfig;
use crate::error::FailureKind;

/// Assertion over a parsed JSON response body.
pub type Predicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Declarative description of one HTTP request and its success criteria.
/// Built once at battery-configuration time and immutable afterwards.
pub struct TestCase {
    pub(crate) name: String,
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<Value>,
    pub(crate) expected: Vec<u16>,
    pub(crate) alternates: Vec<u16>,
    pub(crate) predicate: Option<Predicate>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            body: None,
            expected: vec![200],
            alternates: Vec::new(),
            predicate: None,
        }
    }

    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::GET, path)
    }

    pub fn post(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::POST, path)
    }

    /// JSON request body, sent with Content-Type: application/json.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Replace the primary expected status set (defaults to {200}).
    pub fn expect_status(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.expected = statuses.into_iter().collect();
        self
    }

    /// Statuses tolerated as WARN rather than FAIL, for endpoints whose
    /// upstream behaves differently than the primary expectation assumes.
    pub fn accept_alternate(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.alternates = statuses.into_iter().collect();
        self
    }

    /// Require the response body to parse as JSON and satisfy `predicate`.
    pub fn check<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
    Warn,
}

impl Outcome {
    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Pass => "✅",
            Outcome::Fail => "❌",
            Outcome::Warn => "⚠️",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Fail => write!(f, "FAIL"),
            Outcome::Warn => write!(f, "WARN"),
        }
    }
}

/// Recorded outcome of executing one `TestCase`. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub test_name: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub timestamp: DateTime<Utc>,
}

impl TestResult {
    pub(crate) fn pass(case: &TestCase, detail: impl Into<String>, status: Option<u16>) -> Self {
        Self::record(case, Outcome::Pass, None, detail, status)
    }

    pub(crate) fn fail(
        case: &TestCase,
        kind: FailureKind,
        detail: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Self::record(case, Outcome::Fail, Some(kind), detail, status)
    }

    pub(crate) fn warn(
        case: &TestCase,
        kind: FailureKind,
        detail: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Self::record(case, Outcome::Warn, Some(kind), detail, status)
    }

    fn record(
        case: &TestCase,
        outcome: Outcome,
        kind: Option<FailureKind>,
        detail: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Self {
            test_name: case.name.clone(),
            outcome,
            kind,
            detail: detail.into(),
            status,
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate view of a run: the ordered results plus derived counts.
/// WARN is non-failing but never counts as passed.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn summarize(results: Vec<TestResult>) -> Self {
        let passed = results.iter().filter(|r| r.outcome == Outcome::Pass).count();
        let warned = results.iter().filter(|r| r.outcome == Outcome::Warn).count();
        let failed = results.iter().filter(|r| r.outcome == Outcome::Fail).count();
        Self {
            results,
            passed,
            warned,
            failed,
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Executes an ordered battery of test cases against one configured base URL.
/// Strictly sequential; each request completes or times out before the next
/// is sent, so results come back in declaration order.
pub struct Harness {
    client: reqwest::Client,
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run every case in order. Failures stay local to their case; the run
    /// never short-circuits.
    pub async fn run(&self, cases: &[TestCase]) -> RunSummary {
        let mut results = Vec::with_capacity(cases.len());

        for case in cases {
            tracing::info!(case = %case.name, method = %case.method, path = %case.path, "probing");
            let result = self.execute(case).await;
            match result.outcome {
                Outcome::Pass => tracing::info!(case = %case.name, "{}", result.detail),
                Outcome::Warn => tracing::warn!(case = %case.name, "{}", result.detail),
                Outcome::Fail => tracing::error!(case = %case.name, "{}", result.detail),
            }
            results.push(result);
        }

        RunSummary::summarize(results)
    }

    async fn execute(&self, case: &TestCase) -> TestResult {
        let url = self.config.endpoint(&case.path);

        let mut request = self
            .client
            .request(case.method.clone(), &url)
            .timeout(self.config.timeout());
        if let Some(body) = &case.body {
            request = request.json(body);
        }

        match request.send().await {
            Err(e) => TestResult::fail(case, FailureKind::Network, e.to_string(), None),
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Err(e) => TestResult::fail(
                        case,
                        FailureKind::Network,
                        format!("failed to read response body: {e}"),
                        Some(status),
                    ),
                    Ok(body) => classify::classify(case, status, &body),
                }
            }
        }
    }
}
