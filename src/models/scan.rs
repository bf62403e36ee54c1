//! Scan result types

use crate::utils::CertificateError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Outcome of checking a single certificate file.
///
/// A failed file carries the reason it failed instead of aborting the scan;
/// the caller decides how to report it.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Path of the certificate file that was checked
    pub path: PathBuf,
    /// Extracted expiration date, or the reason extraction failed
    pub result: Result<String, CertificateError>,
}

impl ScanOutcome {
    /// The extracted date, if extraction succeeded
    pub fn date(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }
}

/// Per-file scan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanStatus {
    Ok,
    Error,
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Ok => write!(f, "Ok"),
            ScanStatus::Error => write!(f, "Error"),
        }
    }
}

/// Flat, serializable view of a [`ScanOutcome`] for JSON output
#[derive(Debug, Serialize)]
pub struct ScanRecord {
    pub path: String,
    pub status: ScanStatus,
    pub expires_on: Option<String>,
    pub error: Option<String>,
}

impl From<&ScanOutcome> for ScanRecord {
    fn from(outcome: &ScanOutcome) -> Self {
        match &outcome.result {
            Ok(date) => ScanRecord {
                path: outcome.path.display().to_string(),
                status: ScanStatus::Ok,
                expires_on: Some(date.clone()),
                error: None,
            },
            Err(e) => ScanRecord {
                path: outcome.path.display().to_string(),
                status: ScanStatus::Error,
                expires_on: None,
                error: Some(e.to_string()),
            },
        }
    }
}
