//! zlib compression of plaintext payloads
//!
//! Compression runs before encryption: it exploits plaintext redundancy that
//! encrypted output (high-entropy) no longer has, so the order is not
//! interchangeable. The stream format is zlib (RFC 1950) at the default
//! level and is part of the token wire contract.

use std::io::Write;

use flate2::write::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;

use crate::error::{TokenError, TokenResult};

/// Compress arbitrary bytes into a zlib stream.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(data.len() / 2 + 64),
        Compression::default(),
    );
    let Ok(compressed) = encoder.write_all(data).and_then(|()| encoder.finish()) else {
        unreachable!("zlib compression into an in-memory buffer cannot fail");
    };
    compressed
}

/// Decompress a zlib stream back into the original bytes.
///
/// Fails with `CorruptPayload` when the input is not a valid zlib stream.
/// After authenticated decryption this should be unreachable; it is handled
/// defensively to catch encoder/decoder version mismatches.
pub fn decompress(data: &[u8]) -> TokenResult<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(Vec::new());
    decoder
        .write_all(data)
        .and_then(|()| decoder.finish())
        .map_err(|e| TokenError::CorruptPayload(format!("zlib decompress: {e}")))
}
