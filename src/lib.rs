//! Crypto-Toolkit Library
//!
//! Two independent utilities behind one crate:
//! - Certificate scanner: recursive discovery of `.pem` files and
//!   extraction of their expiration (notAfter) dates
//! - PGP decryptor: directory-backed keyring, optional key import, and
//!   single-file decryption
//!
//! # Usage
//!
//! ```rust,ignore
//! use crypto_toolkit::scanner::{scan, NativeEndDate, ScanConfig};
//!
//! let config = ScanConfig::new("/etc/ssl/private");
//! for outcome in scan(&config, &NativeEndDate)? {
//!     if let Some(date) = outcome.date() {
//!         println!("Certificate: {} expires on {}", outcome.path.display(), date);
//!     }
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod pgp;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{DecryptRequest, ScanOutcome};
pub use pgp::{decrypt_file, Keyring};
pub use scanner::{scan, ScanConfig};
pub use utils::{Result, ToolkitError};
