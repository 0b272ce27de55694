//! Key derivation: PBKDF2-HMAC-SHA256 password + salt → token key
//!
//! Deterministic: the same (password, salt) pair always produces the same
//! key, which is what lets a decoder rebuild the key without any stored
//! state. Keys are derived fresh per call and never cached.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::{TokenError, TokenResult};
use crate::{KEY_SIZE, PBKDF2_ITERATIONS};

/// A 256-bit symmetric key derived from a password and salt.
///
/// Zeroized on drop to prevent secrets lingering in memory.
#[derive(Clone)]
pub struct TokenKey {
    bytes: [u8; KEY_SIZE],
}

impl TokenKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for TokenKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for TokenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// PBKDF2 parameters
#[derive(Debug, Clone)]
pub struct KdfParams {
    /// Iteration count (default: 100,000)
    ///
    /// The default is part of the token wire contract: tokens encrypted at
    /// one count cannot be decrypted at another. It is also the only thing
    /// slowing down offline guessing of weak passwords.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// Derive a 256-bit key from a password and salt via PBKDF2-HMAC-SHA256.
///
/// The salt is public context, not a secret: it only has to differ between
/// unrelated (password, purpose) pairs to defang precomputation attacks, and
/// may be reused across many messages for the same context.
///
/// An empty password is allowed (weak, but that policy belongs to the
/// caller). An empty salt is rejected.
pub fn derive_key(password: &str, salt: &str, params: &KdfParams) -> TokenResult<TokenKey> {
    if salt.is_empty() {
        return Err(TokenError::InvalidParameters(
            "salt must not be empty".to_string(),
        ));
    }
    if params.iterations == 0 {
        return Err(TokenError::InvalidParameters(
            "iteration count must be non-zero".to_string(),
        ));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        params.iterations,
        &mut key,
    );

    Ok(TokenKey::from_bytes(key))
}
