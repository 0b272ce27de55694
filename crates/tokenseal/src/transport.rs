//! Base64 transport encoding
//!
//! Text-safe representation of arbitrary binary data for storage and
//! transmission over text-only channels. Standard alphabet with padding.
//!
//! The `encode_str`/`decode_str` pair round-trips plain Unicode text without
//! encryption. Rust strings are UTF-8, so base64 over the raw bytes is
//! already Unicode-safe; no intermediate escaping layer is needed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{TokenError, TokenResult};

/// Encode arbitrary bytes as a base64 string. 8-bit-safe.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a base64 string back into bytes.
pub fn decode(text: &str) -> TokenResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| TokenError::MalformedInput(format!("base64 decode: {e}")))
}

/// Encode plain text as base64 (no encryption).
pub fn encode_str(text: &str) -> String {
    encode(text.as_bytes())
}

/// Decode base64 back into plain text (no encryption).
pub fn decode_str(text: &str) -> TokenResult<String> {
    let bytes = decode(text)?;
    String::from_utf8(bytes)
        .map_err(|e| TokenError::MalformedInput(format!("decoded text is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_roundtrip() {
        let encoded = encode(b"");
        assert_eq!(encoded, "");
        assert_eq!(decode(&encoded).unwrap(), b"");
    }

    #[test]
    fn all_byte_values_roundtrip() {
        let all: Vec<u8> = (0..=255u8).collect();
        let encoded = encode(&all);
        assert_eq!(decode(&encoded).unwrap(), all);
    }

    #[test]
    fn invalid_base64_is_malformed() {
        let result = decode("not valid base64!!!");
        assert!(matches!(result, Err(TokenError::MalformedInput(_))));
    }

    #[test]
    fn unicode_text_roundtrip() {
        let text = "héllo wörld — コンニチハ 🎉";
        let encoded = encode_str(text);
        assert_eq!(decode_str(&encoded).unwrap(), text);
    }

    #[test]
    fn non_utf8_decoded_text_is_malformed() {
        // 0xFF 0xFE is not valid UTF-8
        let encoded = encode(&[0xFF, 0xFE]);
        let result = decode_str(&encoded);
        assert!(matches!(result, Err(TokenError::MalformedInput(_))));
    }

    proptest! {
        #[test]
        fn bytes_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
            let encoded = encode(&data);
            prop_assert_eq!(decode(&encoded).unwrap(), data);
        }

        #[test]
        fn str_roundtrip(text in "\\PC{0,256}") {
            let encoded = encode_str(&text);
            prop_assert_eq!(decode_str(&encoded).unwrap(), text);
        }
    }
}
