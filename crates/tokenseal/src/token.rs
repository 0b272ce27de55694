//! End-to-end token pipeline
//!
//! Encode: derive key → compress → generate nonce → seal → frame → base64.
//! Decode runs the mirror image, with authentication checked before any
//! decompression. Both directions are linear: no retries, no partial output.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::{TokenError, TokenResult};
use crate::kdf::{derive_key, KdfParams};
use crate::{aead, compress, frame, transport};

/// Encrypt a text payload into a transport-safe token.
///
/// The nonce comes from the operating system CSPRNG, so two calls with
/// identical inputs produce different tokens that both decrypt correctly.
pub fn encrypt_text(plaintext: &str, password: &str, salt: &str) -> TokenResult<String> {
    encrypt_text_with_rng(plaintext, password, salt, &mut OsRng)
}

/// Encrypt a text payload with caller-supplied randomness.
///
/// Exists for reproducible test vectors. Production callers use
/// [`encrypt_text`]; a deterministic or reused nonce source under the same
/// (password, salt) breaks the AEAD guarantees.
pub fn encrypt_text_with_rng<R: RngCore + CryptoRng>(
    plaintext: &str,
    password: &str,
    salt: &str,
    rng: &mut R,
) -> TokenResult<String> {
    let key = derive_key(password, salt, &KdfParams::default())?;

    let compressed = compress::compress(plaintext.as_bytes());
    let nonce = aead::generate_nonce(rng);
    let ciphertext = aead::seal(&key, &nonce, &compressed);
    let framed = frame::build_frame(&nonce, &ciphertext);

    debug!(
        plaintext_bytes = plaintext.len(),
        compressed_bytes = compressed.len(),
        frame_bytes = framed.len(),
        "encrypted payload into token"
    );

    Ok(transport::encode(&framed))
}

/// Decrypt a token back into its text payload.
///
/// Either fully succeeds with validated plaintext or fails with no plaintext
/// bytes exposed. Authentication failure short-circuits before decompression
/// is attempted.
pub fn decrypt_text(token: &str, password: &str, salt: &str) -> TokenResult<String> {
    let framed = transport::decode(token)?;
    let (nonce, ciphertext) = frame::parse_frame(&framed)?;

    let key = derive_key(password, salt, &KdfParams::default())?;

    let compressed = aead::open(&key, nonce, ciphertext)?;
    let plaintext = compress::decompress(&compressed)?;

    debug!(
        frame_bytes = framed.len(),
        plaintext_bytes = plaintext.len(),
        "decrypted token"
    );

    String::from_utf8(plaintext)
        .map_err(|e| TokenError::CorruptPayload(format!("plaintext is not UTF-8: {e}")))
}
