//! Single-file PGP decryption
//!
//! Orchestrates the optional key import and the decrypt-then-write flow.
//! Both fatal conditions (zero keys imported, decryption failure) abort
//! before the output file is touched.

use crate::models::DecryptRequest;
use crate::pgp::Keyring;
use crate::utils::{KeyringError, Result};
use tracing::{debug, info};

/// Decrypt one file according to `request`.
///
/// Steps, in order:
/// 1. If a private key path was given and exists on disk, import it into
///    the keyring. Zero keys imported is fatal; decryption is never
///    attempted in that case.
/// 2. Read the encrypted file and decrypt it against the keyring with the
///    supplied passphrase. Non-success is fatal, carrying the underlying
///    status text.
/// 3. Only after a successful decryption, write the plaintext to the
///    output path (created or overwritten).
///
/// Filesystem errors (missing input, unwritable output) propagate as IO
/// errors. Nothing is retried.
pub fn decrypt_file(request: &DecryptRequest) -> Result<()> {
    let mut keyring = Keyring::open(&request.keyring_dir)?;
    debug!(
        keyring = %keyring.dir().display(),
        keys = keyring.len(),
        "opened keyring"
    );

    if let Some(key_path) = &request.private_key_path {
        if key_path.exists() {
            let key_data = std::fs::read(key_path)?;
            let imported = keyring.import(&key_data)?;
            if imported == 0 {
                return Err(KeyringError::NoKeysImported {
                    path: key_path.display().to_string(),
                }
                .into());
            }
            info!(key = %key_path.display(), imported, "imported private key");
        }
    }

    let ciphertext = std::fs::read(&request.encrypted_path)?;
    let plaintext = keyring.decrypt(&ciphertext, &request.passphrase)?;

    std::fs::write(&request.output_path, &plaintext)?;
    info!(
        output = %request.output_path.display(),
        bytes = plaintext.len(),
        "decryption succeeded"
    );

    Ok(())
}
