//! AES-256-GCM authenticated encryption
//!
//! One cipher call both encrypts and authenticates; decryption verifies the
//! 16-byte tag before releasing a single plaintext byte. The engine does no
//! nonce bookkeeping: uniqueness comes from fresh CSPRNG bytes per call, and
//! randomness is injected by the caller so tests can use deterministic
//! sources.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::{CryptoRng, RngCore};

use crate::error::{TokenError, TokenResult};
use crate::kdf::TokenKey;
use crate::NONCE_SIZE;

/// Generate a fresh random 96-bit nonce.
pub fn generate_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt and authenticate `plaintext` under `key` and `nonce`.
///
/// Returns ciphertext with the 16-byte GCM tag appended.
pub fn seal(key: &TokenKey, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let Ok(ciphertext) = cipher.encrypt(Nonce::from_slice(nonce), plaintext) else {
        unreachable!("AES-GCM encryption cannot fail for in-memory payloads");
    };
    ciphertext
}

/// Verify and decrypt `ciphertext` (including trailing tag).
///
/// Fails with `AuthenticationFailed` whenever the tag does not verify. Wrong
/// key, flipped ciphertext bits, and a mismatched nonce all produce the same
/// error: distinguishing them would leak an oracle.
pub fn open(key: &TokenKey, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> TokenResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| TokenError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KEY_SIZE;
    use proptest::prelude::*;
    use rand::rngs::OsRng;

    fn test_key(fill: u8) -> TokenKey {
        TokenKey::from_bytes([fill; KEY_SIZE])
    }

    #[test]
    fn seal_open_roundtrip() {
        let key = test_key(0x42);
        let nonce = generate_nonce(&mut OsRng);
        let plaintext = b"hello, sealed world!";

        let ciphertext = seal(&key, &nonce, plaintext);
        let opened = open(&key, &nonce, &ciphertext).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn empty_plaintext_roundtrip() {
        let key = test_key(0x00);
        let nonce = [0u8; NONCE_SIZE];

        let ciphertext = seal(&key, &nonce, b"");
        assert_eq!(ciphertext.len(), crate::TAG_SIZE);
        assert_eq!(open(&key, &nonce, &ciphertext).unwrap(), b"");
    }

    #[test]
    fn ciphertext_length_is_plaintext_plus_tag() {
        let key = test_key(0x11);
        let nonce = [7u8; NONCE_SIZE];
        let plaintext = vec![0u8; 1000];

        let ciphertext = seal(&key, &nonce, &plaintext);
        assert_eq!(ciphertext.len(), 1000 + crate::TAG_SIZE);
    }

    #[test]
    fn wrong_key_fails() {
        let nonce = [1u8; NONCE_SIZE];
        let ciphertext = seal(&test_key(0xAA), &nonce, b"secret");

        let result = open(&test_key(0xBB), &nonce, &ciphertext);
        assert!(matches!(result, Err(TokenError::AuthenticationFailed)));
    }

    #[test]
    fn wrong_nonce_fails() {
        let key = test_key(0xAA);
        let ciphertext = seal(&key, &[1u8; NONCE_SIZE], b"secret");

        let result = open(&key, &[2u8; NONCE_SIZE], &ciphertext);
        assert!(matches!(result, Err(TokenError::AuthenticationFailed)));
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let key = test_key(0xAA);
        let nonce = [1u8; NONCE_SIZE];
        let mut ciphertext = seal(&key, &nonce, b"secret");
        ciphertext[0] ^= 0x01;

        let result = open(&key, &nonce, &ciphertext);
        assert!(matches!(result, Err(TokenError::AuthenticationFailed)));
    }

    #[test]
    fn tampered_tag_fails() {
        let key = test_key(0xAA);
        let nonce = [1u8; NONCE_SIZE];
        let mut ciphertext = seal(&key, &nonce, b"secret");
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0x80;

        let result = open(&key, &nonce, &ciphertext);
        assert!(matches!(result, Err(TokenError::AuthenticationFailed)));
    }

    proptest! {
        #[test]
        fn arbitrary_payload_roundtrip(
            data in proptest::collection::vec(any::<u8>(), 0..=2048),
            key_fill in any::<u8>(),
            nonce_fill in any::<u8>(),
        ) {
            let key = test_key(key_fill);
            let nonce = [nonce_fill; NONCE_SIZE];
            let ciphertext = seal(&key, &nonce, &data);
            prop_assert_eq!(open(&key, &nonce, &ciphertext).unwrap(), data);
        }
    }
}
