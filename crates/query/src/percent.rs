//! Strict decoding of `application/x-www-form-urlencoded` components.
//!
//! `url::form_urlencoded::parse` is lenient: it passes broken escapes through
//! and replaces invalid UTF-8. The codec must report those as malformed
//! input, so decoding is done here and only encoding is left to `url`.

use crate::error::ParseError;

/// Decode one key or value. `+` becomes a space; `%XX` becomes the byte
/// `0xXX`. `segment` is the whole `key=value` text, used for error context.
pub(crate) fn decode_component(input: &str, segment: &str) -> Result<String, ParseError> {
    if !input.contains(['%', '+']) {
        return Ok(input.to_string());
    }

    let mut decoded = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'%' => {
                let hi = bytes.get(index + 1).copied().and_then(hex_value);
                let lo = bytes.get(index + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi << 4) | lo);
                        index += 3;
                    }
                    _ => {
                        return Err(ParseError::InvalidEscape {
                            segment: segment.to_string(),
                        });
                    }
                }
            }
            b'+' => {
                decoded.push(b' ');
                index += 1;
            }
            byte => {
                decoded.push(byte);
                index += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|_| ParseError::InvalidUtf8 {
        segment: segment.to_string(),
    })
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(10 + byte - b'a'),
        b'A'..=b'F' => Some(10 + byte - b'A'),
        _ => None,
    }
}
