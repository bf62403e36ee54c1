//! JSON output formatter

use crate::models::{ScanOutcome, ScanRecord};

/// Print scan outcomes as a pretty-printed JSON array to stdout
pub fn print_json(outcomes: &[ScanOutcome]) -> anyhow::Result<()> {
    let records: Vec<ScanRecord> = outcomes.iter().map(ScanRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    println!("{}", json);
    Ok(())
}
