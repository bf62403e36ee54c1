//! Terminal output formatting

use crate::models::ScanOutcome;
use chrono::{NaiveDate, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for scan operations
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a success line
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print one scan outcome.
///
/// Successful files print the contract line
/// `Certificate: <path> expires on <date>`; failed files print the
/// per-file diagnostic and are otherwise skipped.
pub fn print_scan_outcome(outcome: &ScanOutcome, warning_days: i64) {
    match &outcome.result {
        Ok(date) => {
            let annotation = expiry_annotation(date, warning_days);
            println!(
                "Certificate: {} expires on {}{}",
                outcome.path.display(),
                date,
                annotation
            );
        }
        Err(_) => {
            println!("Error processing certificate file: {}", outcome.path.display());
        }
    }
}

/// Print a scan summary
pub fn print_scan_summary(total: usize, failed: usize) {
    println!();
    if failed == 0 {
        println!(
            "{} {} certificate(s) checked",
            style("✓").green(),
            total
        );
    } else {
        println!(
            "{} {} certificate(s) checked, {} failed",
            style("!").yellow().bold(),
            total,
            failed
        );
    }
}

/// A styled ` (expired)` / ` (expires in N days)` suffix for dates close
/// to expiry. Dates that are not `YYYY-MM-DD` get no annotation.
fn expiry_annotation(date: &str, warning_days: i64) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return String::new();
    };

    let days_left = (parsed - Utc::now().date_naive()).num_days();
    if days_left < 0 {
        format!(" {}", style("(expired)").red().bold())
    } else if days_left <= warning_days {
        format!(
            " {}",
            style(format!("(expires in {} days)", days_left)).yellow()
        )
    } else {
        String::new()
    }
}
