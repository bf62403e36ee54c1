//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crypto-toolkit")]
#[command(version)]
#[command(about = "Certificate expiry scanning and PGP file decryption", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree for PEM certificates and report expiry dates
    Scan(ScanArgs),

    /// Decrypt a PGP-encrypted file using a directory-backed keyring
    Decrypt(DecryptArgs),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to start the search from
    #[arg(required = true)]
    pub directory: PathBuf,

    /// Filename suffix identifying certificate files
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Use the external X.509 tool instead of native parsing
    #[arg(long)]
    pub use_tool: bool,

    /// External X.509 tool program name (implies --use-tool)
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct DecryptArgs {
    /// Encrypted input file (armored or binary OpenPGP message)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file for the decrypted plaintext
    #[arg(short, long, required = true, value_name = "FILE")]
    pub output: PathBuf,

    /// Keyring directory holding secret keys
    #[arg(short, long, required = true, value_name = "DIR")]
    pub keyring: PathBuf,

    /// Passphrase for the private key (prompted when omitted)
    #[arg(long, value_name = "PASSPHRASE")]
    pub passphrase: Option<String>,

    /// Private key file to import into the keyring before decrypting
    #[arg(long, value_name = "FILE")]
    pub key: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines
    Plain,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
