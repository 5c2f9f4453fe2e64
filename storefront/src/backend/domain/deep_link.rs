//! Deep links into the messaging app.
//!
//! Messages are encoded exactly like ECMAScript `encodeURIComponent`: ASCII
//! letters, digits and `- _ . ! ~ * ' ( )` pass through, every other byte of
//! the UTF-8 text becomes `%XX` with upper-case hex.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::str::Utf8Error;

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

pub fn decode_uri_component(input: &str) -> Result<String, Utf8Error> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
}

/// `<base_url>/<phone_number>?text=<encoded message>`
pub fn messaging_link(base_url: &str, phone_number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        phone_number,
        encode_uri_component(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("Hi! I'm here (now)"), "Hi!%20I'm%20here%20(now)");
        assert_eq!(encode_uri_component("a+b=c&d/e?f#g"), "a%2Bb%3Dc%26d%2Fe%3Ff%23g");
        assert_eq!(encode_uri_component("*x*\n"), "*x*%0A");
        assert_eq!(encode_uri_component("₹1,500"), "%E2%82%B91%2C500");
        assert_eq!(encode_uri_component("🎁"), "%F0%9F%8E%81");
    }

    #[test]
    fn test_round_trip() {
        let message = "🎁 *HAMPER INQUIRY* 🎁\n\n*Total Amount:* ₹6,396\n100% fresh & \"sweet\"";

        assert_eq!(decode_uri_component(&encode_uri_component(message)).unwrap(), message);
    }

    #[test]
    fn test_messaging_link() {
        assert_eq!(
            messaging_link("https://wa.me/", "91XXXXXXXXXX", "Hi there"),
            "https://wa.me/91XXXXXXXXXX?text=Hi%20there"
        );
    }
}
