//! `HappLink` - RSA-encrypted deep link for the Happ client.
//!
//! Format: `{deep_link_prefix}{base64(rsa_ciphertext)}`
//!
//! The content (typically a subscription URL) is encrypted under the
//! version's embedded public key with PKCS#1 v1.5 padding, then base64
//! encoded with the standard alphabet, padded, no line wrapping.

use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;

use base64::prelude::*;

use crate::core::config::CryptoConfig;
use crate::core::error::{LinkError, LinkResult};
use crate::core::operations::pke::{RsaEncryptor, RsaPublicEncryptor};
use crate::core::types::parts::LinkParts;
use crate::core::version::CryptoVersion;

/// An encrypted deep link bound to a crypto version.
///
/// Holds the raw RSA ciphertext; `Display` renders the composed link and
/// [`HappLink::into_parts`] produces the pair shape. Because PKCS#1 v1.5
/// padding is randomized, encrypting the same content twice yields two
/// different links — the prefix alone is deterministic per version.
///
/// # Example
///
/// ```rust
/// use happlink::{HappLink, V4};
///
/// let link = HappLink::<V4>::try_encrypt("https://sub.example.com/abc")?;
/// assert!(link.to_string().starts_with("happ://crypt4/"));
/// # Ok::<(), happlink::LinkError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HappLink<V: CryptoVersion> {
    /// Raw RSA ciphertext, one modulus block.
    ciphertext: Vec<u8>,
    /// Version marker.
    _version: PhantomData<V>,
}

impl<V: CryptoVersion> HappLink<V> {
    /// Returns the deep-link URI prefix for this version (e.g. `happ://crypt4/`).
    #[must_use]
    pub fn deep_link() -> &'static str {
        V::CONFIG.deep_link
    }

    /// Returns the embedded configuration record for this version.
    #[must_use]
    pub fn config() -> &'static CryptoConfig {
        V::CONFIG
    }

    /// Encrypts `content` under this version's embedded public key.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::EncryptionFailed`] for any failure — oversize
    /// content (more than `key_bits/8 - 11` bytes of UTF-8), bad key
    /// material, or a primitive fault. No further detail is surfaced.
    pub fn try_encrypt(content: &str) -> LinkResult<Self> {
        Self::try_encrypt_with(content, &RsaEncryptor)
    }

    /// Encrypts `content` through a caller-supplied [`RsaPublicEncryptor`].
    ///
    /// The key material is still this version's embedded public key; only
    /// the primitive implementation is injected.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::EncryptionFailed`] if the encryptor fails.
    pub fn try_encrypt_with(
        content: &str,
        encryptor: &impl RsaPublicEncryptor,
    ) -> LinkResult<Self> {
        let ciphertext = encryptor.encrypt(content.as_bytes(), V::CONFIG.public_key_pem)?;
        Ok(Self {
            ciphertext,
            _version: PhantomData,
        })
    }

    /// Returns a reference to the raw ciphertext bytes.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Returns the base64-encoded ciphertext (standard alphabet, padded).
    #[must_use]
    pub fn encrypted_content(&self) -> String {
        BASE64_STANDARD.encode(&self.ciphertext)
    }

    /// Consumes the link and returns the `{deep_link, encrypted_content}`
    /// pair shape.
    #[must_use]
    pub fn into_parts(self) -> LinkParts {
        LinkParts {
            deep_link: V::CONFIG.deep_link,
            encrypted_content: BASE64_STANDARD.encode(&self.ciphertext),
        }
    }

    /// Expected ciphertext length: one RSA modulus block.
    fn ciphertext_len() -> usize {
        V::CONFIG.key_bits / 8
    }
}

/// Encrypts `content` and returns the composed deep-link string.
///
/// One of the two named operations over [`HappLink`]; see
/// [`encrypt_to_parts`] for the pair shape.
///
/// # Errors
///
/// Returns [`LinkError::EncryptionFailed`] for any failure.
pub fn encrypt_to_link<V: CryptoVersion>(content: &str) -> LinkResult<String> {
    Ok(HappLink::<V>::try_encrypt(content)?.to_string())
}

/// Encrypts `content` and returns the `{deep_link, encrypted_content}` pair.
///
/// # Errors
///
/// Returns [`LinkError::EncryptionFailed`] for any failure.
pub fn encrypt_to_parts<V: CryptoVersion>(content: &str) -> LinkResult<LinkParts> {
    Ok(HappLink::<V>::try_encrypt(content)?.into_parts())
}

impl<V: CryptoVersion> Display for HappLink<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            V::CONFIG.deep_link,
            BASE64_STANDARD.encode(&self.ciphertext)
        )
    }
}

impl<V: CryptoVersion> Debug for HappLink<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HappLink")
            .field("version", &V::VERSION)
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

impl<V: CryptoVersion> TryFrom<&str> for HappLink<V> {
    type Error = LinkError;

    /// Parses a composed deep-link string back into its ciphertext.
    ///
    /// This validates structure only (prefix, base64, block length); it
    /// cannot and does not decrypt.
    fn try_from(link: &str) -> Result<Self, Self::Error> {
        let prefix = V::CONFIG.deep_link;

        let Some(encoded) = link.strip_prefix(prefix) else {
            // A different supported version's prefix is a version mismatch,
            // anything else is a malformed link.
            if CryptoConfig::all()
                .iter()
                .any(|cfg| link.starts_with(cfg.deep_link))
            {
                return Err(LinkError::InvalidVersion);
            }
            return Err(LinkError::InvalidFormat);
        };

        let ciphertext = BASE64_STANDARD
            .decode(encoded)
            .map_err(LinkError::Base64Decode)?;

        if ciphertext.len() != Self::ciphertext_len() {
            return Err(LinkError::InvalidFormat);
        }

        Ok(Self {
            ciphertext,
            _version: PhantomData,
        })
    }
}

impl<V: CryptoVersion> TryFrom<String> for HappLink<V> {
    type Error = LinkError;

    fn try_from(link: String) -> Result<Self, Self::Error> {
        Self::try_from(link.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::{V2, V3, V4};

    const CONTENT: &str = "https://sub.example.com/user/abc123";

    #[test]
    fn test_deep_link_prefix_deterministic() {
        assert_eq!(HappLink::<V2>::deep_link(), "happ://crypt2/");
        assert_eq!(HappLink::<V3>::deep_link(), "happ://crypt3/");
        assert_eq!(HappLink::<V4>::deep_link(), "happ://crypt4/");
        // Repeated queries return the identical value.
        assert_eq!(HappLink::<V4>::deep_link(), HappLink::<V4>::deep_link());
    }

    #[test]
    fn test_encrypt_composed_shape() -> LinkResult<()> {
        let link = HappLink::<V4>::try_encrypt(CONTENT)?;
        let composed = link.to_string();

        assert!(composed.starts_with("happ://crypt4/"));
        let encoded = &composed["happ://crypt4/".len()..];
        let decoded = BASE64_STANDARD.decode(encoded)?;
        // 4096-bit key: one 512-byte modulus block.
        assert_eq!(decoded.len(), 512);
        Ok(())
    }

    #[test]
    fn test_output_shapes_carry_same_ciphertext() -> LinkResult<()> {
        let link = HappLink::<V3>::try_encrypt(CONTENT)?;
        let composed = link.to_string();
        let parts = link.into_parts();

        assert_eq!(composed, parts.compose());
        assert_eq!(
            composed,
            format!("{}{}", parts.deep_link, parts.encrypted_content)
        );
        Ok(())
    }

    #[test]
    fn test_ciphertext_differs_across_calls() -> LinkResult<()> {
        let a = HappLink::<V2>::try_encrypt(CONTENT)?;
        let b = HappLink::<V2>::try_encrypt(CONTENT)?;
        assert_ne!(a.ciphertext(), b.ciphertext());
        assert_ne!(a.to_string(), b.to_string());
        Ok(())
    }

    #[test]
    fn test_empty_content_succeeds() -> LinkResult<()> {
        let link = HappLink::<V2>::try_encrypt("")?;
        assert!(!link.encrypted_content().is_empty());
        assert_eq!(link.ciphertext().len(), 256);
        Ok(())
    }

    #[test]
    fn test_oversize_content_fails_uniformly() {
        // 2048-bit key: capacity is 245 bytes, 246 must fail.
        let content = "a".repeat(246);
        let result = HappLink::<V2>::try_encrypt(&content);
        assert!(matches!(result, Err(LinkError::EncryptionFailed)));
    }

    #[test]
    fn test_content_at_capacity_succeeds() -> LinkResult<()> {
        let content = "a".repeat(245);
        HappLink::<V2>::try_encrypt(&content)?;
        Ok(())
    }

    #[test]
    fn test_parse_round_trip() -> LinkResult<()> {
        let link = HappLink::<V4>::try_encrypt(CONTENT)?;
        let composed = link.to_string();

        let parsed = HappLink::<V4>::try_from(composed.as_str())?;
        assert_eq!(parsed, link);
        assert_eq!(parsed.to_string(), composed);
        Ok(())
    }

    #[test]
    fn test_parse_wrong_version_prefix() -> LinkResult<()> {
        let composed = HappLink::<V2>::try_encrypt(CONTENT)?.to_string();
        let result = HappLink::<V4>::try_from(composed.as_str());
        assert!(matches!(result, Err(LinkError::InvalidVersion)));
        Ok(())
    }

    #[test]
    fn test_parse_unknown_scheme() {
        let result = HappLink::<V4>::try_from("https://example.com/QUJD");
        assert!(matches!(result, Err(LinkError::InvalidFormat)));
    }

    #[test]
    fn test_parse_bad_base64() {
        let result = HappLink::<V4>::try_from("happ://crypt4/!!!not-base64!!!");
        assert!(matches!(result, Err(LinkError::Base64Decode(_))));
    }

    #[test]
    fn test_parse_wrong_block_length() {
        let result = HappLink::<V4>::try_from("happ://crypt4/QUJD");
        assert!(matches!(result, Err(LinkError::InvalidFormat)));
    }

    #[test]
    fn test_named_operations_share_semantics() -> LinkResult<()> {
        let composed = encrypt_to_link::<V4>(CONTENT)?;
        assert!(composed.starts_with("happ://crypt4/"));

        let parts = encrypt_to_parts::<V4>(CONTENT)?;
        assert_eq!(parts.deep_link, "happ://crypt4/");
        assert!(!parts.encrypted_content.is_empty());
        Ok(())
    }

    #[test]
    fn test_injected_encryptor_is_used() -> LinkResult<()> {
        struct Fixed;

        impl RsaPublicEncryptor for Fixed {
            fn encrypt(&self, _plaintext: &[u8], _public_key_pem: &str) -> LinkResult<Vec<u8>> {
                Ok(vec![0xAB; 512])
            }
        }

        let link = HappLink::<V4>::try_encrypt_with(CONTENT, &Fixed)?;
        assert_eq!(link.ciphertext(), &[0xAB; 512][..]);
        // With fixed ciphertext the two output shapes are byte-identical.
        let composed = link.to_string();
        let parts = link.into_parts();
        assert_eq!(composed, parts.compose());
        Ok(())
    }

    #[test]
    fn test_debug_omits_payload() -> LinkResult<()> {
        let link = HappLink::<V2>::try_encrypt(CONTENT)?;
        let debug_str = format!("{link:?}");
        assert!(debug_str.contains("HappLink"));
        assert!(debug_str.contains("ciphertext_len"));
        Ok(())
    }
}
