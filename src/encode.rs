//! Percent-encoding and decoding for URI components.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a URI component: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string under URI-component rules.
///
/// Multi-byte UTF-8 characters are escaped byte by byte.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Decode percent-escapes in a URI component.
///
/// Escapes that do not form valid UTF-8 are replaced rather than rejected,
/// so decoding never fails.
pub fn decode_component(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_encode_multibyte() {
        assert_eq!(encode_component("Jöäå"), "J%C3%B6%C3%A4%C3%A5");
    }

    #[test]
    fn test_decode_roundtrip() {
        assert_eq!(decode_component("J%C3%B6%C3%A4%C3%A5"), "Jöäå");
        assert_eq!(decode_component("New%20York"), "New York");
    }

    #[test]
    fn test_decode_plain_passthrough() {
        assert_eq!(decode_component("plain"), "plain");
    }
}
