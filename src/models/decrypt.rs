//! Decryption request type

use std::path::PathBuf;

/// A single decryption operation, fully described by the caller.
///
/// Nothing here outlives one invocation; no state is cached between runs.
#[derive(Debug, Clone)]
pub struct DecryptRequest {
    /// Path to the encrypted file (armored or binary OpenPGP message)
    pub encrypted_path: PathBuf,
    /// Path to write the decrypted result to (created or overwritten)
    pub output_path: PathBuf,
    /// Directory-backed keyring holding secret keys
    pub keyring_dir: PathBuf,
    /// Passphrase unlocking the secret key
    pub passphrase: String,
    /// Optional private key file to import into the keyring first
    pub private_key_path: Option<PathBuf>,
}
