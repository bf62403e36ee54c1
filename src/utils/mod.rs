//! Utility modules for crypto-toolkit
//!
//! This module contains error types and other shared utilities.

pub mod error;

pub use error::{
    CertificateError, ConfigError, DecryptError, KeyringError, Result, ScanError, ToolkitError,
};
