//! Certificate expiration scanning
//!
//! Provides recursive discovery of PEM certificate files and pluggable
//! extraction of their notAfter dates.

pub mod enddate;
pub mod walk;

pub use enddate::{EndDateSource, NativeEndDate, OpensslEndDate};
pub use walk::{find_certificates, scan, ScanConfig};
