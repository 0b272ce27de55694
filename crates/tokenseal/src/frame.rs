//! Token frame layout
//!
//! Frame format (binary):
//! ```text
//! [1 byte: format version = 0x01][12 bytes: nonce][N bytes: ciphertext + 16-byte tag]
//! ```
//!
//! No length prefixes: the version and nonce widths are compile-time
//! constants and the ciphertext is the rest of the buffer. The version byte
//! is the only extension point — a future nonce-size or algorithm change
//! bumps it so old decoders reject new tokens instead of misparsing them.

use crate::error::{TokenError, TokenResult};
use crate::{FORMAT_VERSION, NONCE_SIZE, TAG_SIZE};

/// Minimum size of a valid frame: version + nonce + tag of an empty payload.
pub const MIN_FRAME_LEN: usize = 1 + NONCE_SIZE + TAG_SIZE;

/// Concatenate version tag, nonce, and ciphertext into one opaque blob.
pub fn build_frame(nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(1 + NONCE_SIZE + ciphertext.len());
    frame.push(FORMAT_VERSION);
    frame.extend_from_slice(nonce);
    frame.extend_from_slice(ciphertext);
    frame
}

/// Split a frame back into its nonce and ciphertext.
///
/// Fails with `MalformedInput` when the frame is shorter than the minimum
/// length or carries an unknown version byte.
pub fn parse_frame(frame: &[u8]) -> TokenResult<(&[u8; NONCE_SIZE], &[u8])> {
    if frame.len() < MIN_FRAME_LEN {
        return Err(TokenError::MalformedInput(format!(
            "frame too short: {} bytes (minimum {MIN_FRAME_LEN})",
            frame.len()
        )));
    }

    let version = frame[0];
    if version != FORMAT_VERSION {
        return Err(TokenError::MalformedInput(format!(
            "unknown format version: {version:#04x}"
        )));
    }

    let (nonce_bytes, ciphertext) = frame[1..].split_at(NONCE_SIZE);
    let Ok(nonce) = <&[u8; NONCE_SIZE]>::try_from(nonce_bytes) else {
        unreachable!("split_at produced exactly NONCE_SIZE bytes");
    };

    Ok((nonce, ciphertext))
}
