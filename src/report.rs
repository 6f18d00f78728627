// Presentation sinks for run results. The harness returns a RunSummary and
// never prints; rendering is the sink's job so console, JSON, and future CI
// formats stay swappable.
use std::io::Write;

use serde_json::json;

use crate::harness::{RunSummary, TestResult};

pub trait ReportSink {
    /// Called once per executed case, in result order.
    fn case_result(&mut self, result: &TestResult) -> anyhow::Result<()>;

    /// Called once after all cases with the aggregate summary.
    fn summary(&mut self, summary: &RunSummary) -> anyhow::Result<()>;
}

/// Human-readable timestamped per-test lines plus an aggregate block.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn case_result(&mut self, result: &TestResult) -> anyhow::Result<()> {
        let timestamp = result.timestamp.format("%Y-%m-%d %H:%M:%S");
        writeln!(
            self.out,
            "[{}] {} {}: {}",
            timestamp,
            result.outcome.symbol(),
            result.test_name,
            result.outcome
        )?;
        if !result.detail.is_empty() {
            writeln!(self.out, "    Details: {}", result.detail)?;
        }
        Ok(())
    }

    fn summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(60))?;
        writeln!(self.out, "📊 RUN SUMMARY")?;
        writeln!(self.out, "{}", "=".repeat(60))?;
        writeln!(self.out, "✅ Passed: {}/{}", summary.passed, summary.total())?;
        writeln!(self.out, "⚠️ Warned: {}/{}", summary.warned, summary.total())?;
        writeln!(self.out, "❌ Failed: {}/{}", summary.failed, summary.total())?;
        Ok(())
    }
}

/// Machine-readable report for CI: one pretty-printed JSON document emitted
/// with the summary. Per-case calls are a no-op; everything the sink needs is
/// already in the summary's ordered results.
pub struct JsonSink<W: Write> {
    out: W,
}

impl JsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> JsonSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn case_result(&mut self, _result: &TestResult) -> anyhow::Result<()> {
        Ok(())
    }

    fn summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        let report = json!({
            "success": !summary.has_failures(),
            "passed": summary.passed,
            "warned": summary.warned,
            "failed": summary.failed,
            "total": summary.total(),
            "results": summary.results,
        });
        writeln!(self.out, "{}", serde_json::to_string_pretty(&report)?)?;
        Ok(())
    }
}

/// Render an entire summary through a sink: every case line, then the
/// aggregate block.
pub fn render(summary: &RunSummary, sink: &mut dyn ReportSink) -> anyhow::Result<()> {
    for result in &summary.results {
        sink.case_result(result)?;
    }
    sink.summary(summary)
}
