use serde_json::json;

use crate::battery;
use crate::cli::OutputFormat;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let battery = battery::default_battery();

    match output_format {
        OutputFormat::Json => {
            let cases: Vec<_> = battery
                .iter()
                .map(|case| {
                    json!({
                        "name": case.name(),
                        "method": case.method().as_str(),
                        "path": case.path(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json!({ "cases": cases }))?);
        }
        OutputFormat::Text => {
            for case in &battery {
                println!("{:6} {:40} {}", case.method().as_str(), case.name(), case.path());
            }
            println!();
            println!("{} cases", battery.len());
        }
    }

    Ok(())
}
