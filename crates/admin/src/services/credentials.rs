//! Encryption for social account access tokens at rest.
//!
//! Tokens are sealed with AES-256-GCM under a key from
//! `ADMIN_CREDENTIAL_KEY`. The stored format is
//! `base64(nonce || ciphertext)` with a random 96-bit nonce per token.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::RngCore;
use thiserror::Error;

use crate::config::CredentialKey;

/// AES-GCM nonce length in bytes.
const NONCE_LENGTH: usize = 12;

/// Errors that can occur while sealing or opening tokens.
#[derive(Debug, Error)]
pub enum CredentialCipherError {
    /// Encryption failed.
    #[error("failed to encrypt credential")]
    Encrypt,

    /// Decryption failed (wrong key or tampered ciphertext).
    #[error("failed to decrypt credential")]
    Decrypt,

    /// Stored value is not valid base64 or is too short to hold a nonce.
    #[error("stored credential is malformed")]
    Malformed,

    /// Decrypted bytes are not valid UTF-8.
    #[error("decrypted credential is not valid UTF-8")]
    InvalidUtf8,
}

/// Seals and opens social account access tokens.
#[derive(Clone)]
pub struct CredentialCipher {
    cipher: Aes256Gcm,
}

impl CredentialCipher {
    /// Create a cipher from the configured key.
    #[must_use]
    pub fn new(key: &CredentialKey) -> Self {
        Self {
            cipher: Aes256Gcm::new(key.as_bytes().into()),
        }
    }

    /// Encrypt a plaintext token for storage.
    ///
    /// # Errors
    ///
    /// Returns `CredentialCipherError::Encrypt` if encryption fails.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CredentialCipherError> {
        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CredentialCipherError::Encrypt)?;

        let mut sealed = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(sealed))
    }

    /// Decrypt a stored token.
    ///
    /// # Errors
    ///
    /// Returns `CredentialCipherError::Malformed` if the stored value cannot
    /// be decoded, or `CredentialCipherError::Decrypt` if authentication
    /// fails (wrong key or tampered data).
    pub fn decrypt(&self, stored: &str) -> Result<String, CredentialCipherError> {
        let sealed = BASE64
            .decode(stored)
            .map_err(|_| CredentialCipherError::Malformed)?;

        if sealed.len() <= NONCE_LENGTH {
            return Err(CredentialCipherError::Malformed);
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LENGTH);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CredentialCipherError::Decrypt)?;

        String::from_utf8(plaintext).map_err(|_| CredentialCipherError::InvalidUtf8)
    }
}

impl std::fmt::Debug for CredentialCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialCipher").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn test_cipher() -> CredentialCipher {
        let encoded = BASE64.encode([42u8; 32]);
        let key = CredentialKey::from_base64("TEST_KEY", &encoded).unwrap();
        CredentialCipher::new(&key)
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let cipher = test_cipher();
        let sealed = cipher.encrypt("EAACEdEose0cBA...").unwrap();
        assert_eq!(cipher.decrypt(&sealed).unwrap(), "EAACEdEose0cBA...");
    }

    #[test]
    fn test_ciphertext_is_not_plaintext() {
        let cipher = test_cipher();
        let sealed = cipher.encrypt("token-value").unwrap();
        assert!(!sealed.contains("token-value"));
    }

    #[test]
    fn test_nonces_differ_per_encryption() {
        let cipher = test_cipher();
        let a = cipher.encrypt("same token").unwrap();
        let b = cipher.encrypt("same token").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let cipher = test_cipher();
        let sealed = cipher.encrypt("token-value").unwrap();
        let mut bytes = BASE64.decode(&sealed).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        let tampered = BASE64.encode(bytes);

        assert!(matches!(
            cipher.decrypt(&tampered),
            Err(CredentialCipherError::Decrypt)
        ));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let sealed = test_cipher().encrypt("token-value").unwrap();

        let other_encoded = BASE64.encode([7u8; 32]);
        let other_key = CredentialKey::from_base64("TEST_KEY", &other_encoded).unwrap();
        let other = CredentialCipher::new(&other_key);

        assert!(other.decrypt(&sealed).is_err());
    }

    #[test]
    fn test_malformed_input_rejected() {
        let cipher = test_cipher();
        assert!(matches!(
            cipher.decrypt("not base64!!"),
            Err(CredentialCipherError::Malformed)
        ));
        assert!(matches!(
            cipher.decrypt(&BASE64.encode([0u8; 4])),
            Err(CredentialCipherError::Malformed)
        ));
    }
}
