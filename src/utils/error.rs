//! Custom error types for crypto-toolkit
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of certificate scanning and PGP decryption.

use thiserror::Error;

/// Top-level error type for the crypto-toolkit application
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Certificate error: {0}")]
    Certificate(#[from] CertificateError),

    #[error("Keyring error: {0}")]
    Keyring(#[from] KeyringError),

    #[error("Decryption error: {0}")]
    Decrypt(#[from] DecryptError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Directory scanning errors
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Scan root does not exist: {path}")]
    RootNotFound { path: String },

    #[error("Scan root is not a directory: {path}")]
    RootNotADirectory { path: String },

    #[error("Failed to read directory {path}: {message}")]
    ReadDirFailed { path: String, message: String },
}

/// Certificate end-date extraction errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Failed to read certificate file {path}: {message}")]
    FileReadError { path: String, message: String },

    #[error("No CERTIFICATE blocks found in {path}")]
    NoCertificateBlocks { path: String },

    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("Invalid timestamp in certificate validity period")]
    InvalidTimestamp,

    #[error("{program} exited with {status} for {path}")]
    ToolFailed {
        program: String,
        status: String,
        path: String,
    },

    #[error("Failed to invoke {program}: {message}")]
    ToolInvocation { program: String, message: String },

    #[error("Unexpected tool output: {output}")]
    UnparsableOutput { output: String },
}

/// Keyring loading and key import errors
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("Failed to open keyring directory {path}: {message}")]
    OpenFailed { path: String, message: String },

    #[error("No keys imported from {path}")]
    NoKeysImported { path: String },

    #[error("Failed to persist imported key: {message}")]
    PersistFailed { message: String },
}

/// Message decryption errors
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("Keyring contains no secret keys")]
    EmptyKeyring,

    #[error("Failed to parse encrypted message: {message}")]
    MalformedMessage { message: String },

    #[error("Decryption failed: {status}")]
    Failed { status: String },

    #[error("Decrypted message contains no literal data")]
    NoContent,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
