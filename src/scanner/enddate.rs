//! Certificate end-date extraction
//!
//! Two sources for the notAfter field: native parsing via x509-parser
//! (the default), and an external `openssl x509` invocation kept as a
//! swappable collaborator for environments that insist on it.

use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use std::path::Path;
use std::process::Command;
use x509_parser::prelude::*;

/// Capability: extract the expiration date of a certificate file.
///
/// Implementations return a date string on success; a per-file failure is an
/// error for that file only and never aborts a scan.
pub trait EndDateSource {
    fn end_date(&self, path: &Path) -> Result<String, CertificateError>;
}

/// Extracts notAfter by parsing the certificate directly.
///
/// Reads the first CERTIFICATE block of a PEM file and formats the validity
/// end as `YYYY-MM-DD`.
pub struct NativeEndDate;

impl EndDateSource for NativeEndDate {
    fn end_date(&self, path: &Path) -> Result<String, CertificateError> {
        let not_after = read_not_after(path)?;
        Ok(not_after.format("%Y-%m-%d").to_string())
    }
}

/// Parse the first CERTIFICATE block of a PEM file and return its notAfter.
pub fn read_not_after(path: &Path) -> Result<DateTime<Utc>, CertificateError> {
    let data = std::fs::read(path).map_err(|e| CertificateError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let pems = ::pem::parse_many(&data).map_err(|e| CertificateError::FileReadError {
        path: path.display().to_string(),
        message: format!("Failed to parse PEM: {}", e),
    })?;

    let der = pems
        .iter()
        .find(|p| p.tag() == "CERTIFICATE")
        .map(|p| p.contents())
        .ok_or_else(|| CertificateError::NoCertificateBlocks {
            path: path.display().to_string(),
        })?;

    let (_, cert) =
        X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
            message: format!("Failed to parse certificate: {:?}", e),
        })?;

    asn1_time_to_datetime(cert.validity().not_after)
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    let timestamp = time.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or(CertificateError::InvalidTimestamp)
}

/// Extracts notAfter by shelling out to an external X.509 tool.
///
/// Invokes `<program> x509 -in <path> -noout -enddate` and parses the
/// `notAfter=<date text>` line from stdout. A non-zero exit is a per-file
/// failure.
pub struct OpensslEndDate {
    program: String,
}

impl OpensslEndDate {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OpensslEndDate {
    fn default() -> Self {
        Self::new("openssl")
    }
}

impl EndDateSource for OpensslEndDate {
    fn end_date(&self, path: &Path) -> Result<String, CertificateError> {
        let output = Command::new(&self.program)
            .arg("x509")
            .arg("-in")
            .arg(path)
            .arg("-noout")
            .arg("-enddate")
            .output()
            .map_err(|e| CertificateError::ToolInvocation {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(CertificateError::ToolFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                path: path.display().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_enddate_line(stdout.trim())
    }
}

/// Parse the value out of a `notAfter=<date text>` line.
///
/// Splits on `=`, takes the second segment, then takes its first
/// whitespace-delimited token. NOTE: openssl prints dates like
/// `notAfter=Jan  1 00:00:00 2030 GMT`, so this returns only the month
/// token (`Jan`). The truncation is long-standing observable behavior of
/// the tool-backed path and is kept as-is; use [`NativeEndDate`] for a
/// real `YYYY-MM-DD` date.
pub fn parse_enddate_line(line: &str) -> Result<String, CertificateError> {
    line.split('=')
        .nth(1)
        .and_then(|value| value.split_whitespace().next())
        .map(|token| token.to_string())
        .ok_or_else(|| CertificateError::UnparsableOutput {
            output: line.to_string(),
        })
}
