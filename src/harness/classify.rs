use serde_json::Value;

use crate::error::FailureKind;
use crate::harness::{TestCase, TestResult};

/// Classify a completed request against the case's success criteria.
///
/// Policy: primary expected status AND satisfied predicate (or none) is PASS;
/// otherwise an acceptable-alternate status is WARN; anything else is FAIL.
/// The body is only parsed as JSON when a predicate needs it.
pub(crate) fn classify(case: &TestCase, status: u16, body: &str) -> TestResult {
    if case.expected.contains(&status) {
        return match &case.predicate {
            None => TestResult::pass(case, format!("status {status}"), Some(status)),
            Some(predicate) => match serde_json::from_str::<Value>(body) {
                Err(_) => {
                    TestResult::fail(case, FailureKind::Parse, "invalid JSON body", Some(status))
                }
                Ok(json) if predicate(&json) => TestResult::pass(
                    case,
                    format!("status {status}, body satisfied predicate"),
                    Some(status),
                ),
                Ok(_) => TestResult::fail(
                    case,
                    FailureKind::Parse,
                    "response body failed predicate",
                    Some(status),
                ),
            },
        };
    }

    if case.alternates.contains(&status) {
        return TestResult::warn(
            case,
            FailureKind::for_status(status),
            format!(
                "status {status} accepted as alternate to expected {:?}",
                case.expected
            ),
            Some(status),
        );
    }

    TestResult::fail(
        case,
        FailureKind::for_status(status),
        format!("expected status {:?}, got {status}", case.expected),
        Some(status),
    )
}
