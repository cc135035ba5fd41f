use serde::Serialize;

use wayfinder_core::error::Result;
use wayfinder_core::search::SearchReport;

/// Output one search report as pretty-printed JSON.
pub fn output_json<N: Serialize>(report: &SearchReport<N>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// A report as a JSON value, for aggregation into the demo array.
pub fn report_value<N: Serialize>(report: &SearchReport<N>) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(report)?)
}
