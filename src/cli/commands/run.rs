use crate::battery;
use crate::cli::OutputFormat;
use crate::config::HarnessConfig;
use crate::harness::Harness;
use crate::report::{self, ConsoleSink, JsonSink, ReportSink};

pub async fn handle(
    base_url: Option<String>,
    timeout: Option<u64>,
    only: Option<String>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    // Misconfiguration fails fast, before any request is issued.
    let config = HarnessConfig::resolve(base_url, timeout)?;

    let mut cases = battery::default_battery();
    if let Some(filter) = &only {
        cases.retain(|case| case.name().contains(filter.as_str()));
        if cases.is_empty() {
            anyhow::bail!("no battery case matches '{}'", filter);
        }
    }

    tracing::info!(base_url = %config.base_url(), cases = cases.len(), "starting probe run");

    let harness = Harness::new(config);
    let summary = harness.run(&cases).await;

    let mut sink: Box<dyn ReportSink> = match output_format {
        OutputFormat::Text => Box::new(ConsoleSink::stdout()),
        OutputFormat::Json => Box::new(JsonSink::stdout()),
    };
    report::render(&summary, sink.as_mut())?;

    // Non-zero exit on failure; WARN alone is non-fatal.
    if summary.has_failures() {
        anyhow::bail!(
            "{} of {} probes failed",
            summary.failed,
            summary.total()
        );
    }

    Ok(())
}
