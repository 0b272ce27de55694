use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;

/// Error taxonomy for the token codec.
///
/// Messages never contain passwords, salts, key material, or plaintext.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Transport text is not valid base64, or the decoded frame is shorter
    /// than the minimum length, or the format version is unknown.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// AEAD tag verification failed: wrong password/salt or tampered data.
    ///
    /// Deliberately carries no detail about which. Distinguishing wrong-key
    /// from tampered-ciphertext would hand an oracle to an attacker.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Decompression or UTF-8 validation failed after the tag verified.
    ///
    /// Unreachable in correct operation: authentication already passed, so
    /// this indicates an encoder/decoder version mismatch, not an attack.
    #[error("corrupt payload: {0}")]
    CorruptPayload(String),

    /// Caller input rejected outright (e.g. empty salt).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}
