//! Decrypt command implementation

use crate::cli::DecryptArgs;
use crate::models::DecryptRequest;
use crate::output;
use crate::pgp::decrypt_file;

/// Run the decrypt command.
///
/// Prompts for the passphrase when it was not supplied on the command line.
pub fn run_decrypt(args: &DecryptArgs) -> anyhow::Result<()> {
    let passphrase = match &args.passphrase {
        Some(passphrase) => passphrase.clone(),
        None => dialoguer::Password::new()
            .with_prompt(format!(
                "Passphrase for {}",
                args.input.file_name().unwrap_or_default().to_string_lossy()
            ))
            .allow_empty_password(true)
            .interact()?,
    };

    let request = DecryptRequest {
        encrypted_path: args.input.clone(),
        output_path: args.output.clone(),
        keyring_dir: args.keyring.clone(),
        passphrase,
        private_key_path: args.key.clone(),
    };

    decrypt_file(&request)?;

    output::print_success(&format!(
        "Decryption successful! Decrypted file saved to: {}",
        args.output.display()
    ));

    Ok(())
}
