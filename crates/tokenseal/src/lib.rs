//! tokenseal: password-based authenticated text token codec
//!
//! Turns an arbitrary text payload into a self-contained, transport-safe
//! opaque token, and reverses the transformation given the same password and
//! a public salt.
//!
//! Pipeline: plaintext → PBKDF2 key derivation → zlib compress → AES-256-GCM
//! encrypt (random nonce) → frame → base64 token
//!
//! Token wire format (after base64 decoding):
//! ```text
//! [1 byte: format version = 0x01][12 bytes: random nonce][N bytes: ciphertext][16 bytes: GCM tag]
//! ```
//!
//! Security contracts:
//! - The derived key is a pure function of (password, salt): same inputs
//!   always produce the same key, so decoding never needs stored key state.
//! - Nonces are fresh CSPRNG bytes per encryption. Uniqueness is structural:
//!   the 96-bit space is large relative to expected message volume.
//! - Compression happens before encryption. Ciphertext is high-entropy, so
//!   the order is not interchangeable.
//! - Authentication failure is a single opaque error. Wrong password, wrong
//!   salt, and tampered ciphertext are indistinguishable to the caller.
//! - Keys are derived per call, never cached, and zeroized on drop.

pub mod aead;
pub mod compress;
pub mod error;
pub mod frame;
pub mod kdf;
pub mod token;
pub mod transport;

pub use error::{TokenError, TokenResult};
pub use kdf::{derive_key, KdfParams, TokenKey};
pub use token::{decrypt_text, encrypt_text, encrypt_text_with_rng};

/// Size of the derived symmetric key in bytes (256-bit, AES-256-GCM)
pub const KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce (96-bit)
pub const NONCE_SIZE: usize = 12;

/// Size of a GCM authentication tag
pub const TAG_SIZE: usize = 16;

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// This is a wire-compatibility constant and the sole defense against
/// offline brute-force of weak passwords. Lowering it silently breaks both.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Token format version written as the first frame byte.
///
/// Any future change to the nonce size or algorithm suite must bump this so
/// old tokens are rejected instead of misparsed.
pub const FORMAT_VERSION: u8 = 0x01;
