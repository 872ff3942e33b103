//! RSA public-key encryption of link content.
//!
//! This module wraps the one cryptographic primitive the crate uses:
//! RSA encryption with PKCS#1 v1.5 padding (RFC 8017 §7.2.1) over the UTF-8
//! bytes of the content, with padding randomness from the OS CSPRNG. The
//! primitive sits behind [`RsaPublicEncryptor`] so the backing library is a
//! single swap point; [`RsaEncryptor`] (RustCrypto `rsa`) is the only shipped
//! implementation.

use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use crate::core::error::{LinkError, LinkResult};

/// Fixed overhead of PKCS#1 v1.5 encryption padding, in bytes.
pub const PKCS1_PADDING_OVERHEAD: usize = 11;

/// Maximum content length in bytes for an RSA key of `key_bits` bits
/// under PKCS#1 v1.5 padding.
///
/// For the largest shipped key (4096 bits) this is 501 bytes.
#[must_use]
pub const fn max_content_len(key_bits: usize) -> usize {
    key_bits / 8 - PKCS1_PADDING_OVERHEAD
}

/// Encrypts plaintext bytes under a PEM-encoded RSA public key.
///
/// PKCS#1 v1.5 padding is randomized, so repeated encryption of identical
/// plaintext under the same key yields different ciphertext each time.
/// Every failure collapses to [`LinkError::EncryptionFailed`].
pub trait RsaPublicEncryptor {
    /// Encrypts `plaintext` under `public_key_pem`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::EncryptionFailed`] if the key does not parse,
    /// the plaintext exceeds the padding capacity, or the primitive fails.
    fn encrypt(&self, plaintext: &[u8], public_key_pem: &str) -> LinkResult<Vec<u8>>;
}

/// The shipped [`RsaPublicEncryptor`] implementation, backed by the
/// RustCrypto `rsa` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RsaEncryptor;

impl RsaPublicEncryptor for RsaEncryptor {
    fn encrypt(&self, plaintext: &[u8], public_key_pem: &str) -> LinkResult<Vec<u8>> {
        let key = RsaPublicKey::from_public_key_pem(public_key_pem)
            .map_err(|_| LinkError::EncryptionFailed)?;

        // key.size() is the modulus length in bytes; the padding scheme
        // needs at least 11 of them.
        if plaintext.len() + PKCS1_PADDING_OVERHEAD > key.size() {
            return Err(LinkError::EncryptionFailed);
        }

        key.encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, plaintext)
            .map_err(|_| LinkError::EncryptionFailed)
    }
}
