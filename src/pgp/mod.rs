//! OpenPGP file decryption
//!
//! A directory-backed keyring plus a single-file decrypt operation. The
//! underlying OpenPGP implementation is the `pgp` crate and is reachable
//! only through [`Keyring`], so it stays swappable.

pub mod decrypt;
pub mod keyring;

pub use decrypt::decrypt_file;
pub use keyring::Keyring;
