//! Shared data types for crypto-toolkit

pub mod decrypt;
pub mod scan;

pub use decrypt::DecryptRequest;
pub use scan::{ScanOutcome, ScanRecord, ScanStatus};
