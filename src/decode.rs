//! Byte-to-text decoding with a fixed encoding priority.

use crate::error::DecodeError;

/// Decode raw file bytes, trying UTF-8 first and Latin-1 second.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail; the error arm only becomes reachable once a
/// stricter encoding joins the list.
pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    for decoder in [decode_utf8, decode_latin1] {
        if let Some(text) = decoder(bytes) {
            return Ok(text);
        }
    }
    Err(DecodeError::UnsupportedEncoding)
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_string)
}

fn decode_latin1(bytes: &[u8]) -> Option<String> {
    Some(bytes.iter().map(|&b| b as char).collect())
}
