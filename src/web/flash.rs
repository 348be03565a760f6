//! Flash message cookie
//!
//! The post-redirect-get flow carries its one-shot message in a cookie.
//! The value is percent-encoded and prefixed with a keyed integrity tag
//! derived from the session secret, so a tampered cookie is silently
//! discarded rather than echoed back into the page.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use sha2::{Digest, Sha256};

pub const COOKIE_NAME: &str = "flash";

/// Encode a flash message into a cookie value: `<tag>.<encoded message>`.
pub fn encode(secret: &str, message: &str) -> String {
    let encoded = utf8_percent_encode(message, NON_ALPHANUMERIC);
    format!("{}.{}", tag(secret, message), encoded)
}

/// Decode and verify a cookie value produced by [`encode`]. Returns
/// `None` for malformed or tampered values.
pub fn decode(secret: &str, value: &str) -> Option<String> {
    let (tag_hex, encoded) = value.split_once('.')?;
    let message = percent_decode_str(encoded).decode_utf8().ok()?.into_owned();
    if tag(secret, &message) == tag_hex {
        Some(message)
    } else {
        None
    }
}

/// `Set-Cookie` header value carrying a flash message.
pub fn set_cookie(secret: &str, message: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME,
        encode(secret, message)
    )
}

/// `Set-Cookie` header value that clears the flash cookie.
pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; Max-Age=0")
}

/// Pull the flash message out of a request's `Cookie` header value.
pub fn from_cookie_header(secret: &str, header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| decode(secret, value))
}

/// Keyed SHA-256 digest over secret and message, truncated to 16 hex
/// characters. The zero byte separates the two inputs so their boundary
/// cannot shift.
fn tag(secret: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update([0u8]);
    hasher.update(message.as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_messages() {
        let message = "Please upload both Resume and Job Description files.";
        let value = encode("secret", message);
        assert_eq!(decode("secret", &value).as_deref(), Some(message));
    }

    #[test]
    fn rejects_tampered_values() {
        let value = encode("secret", "original");
        let (tag, _) = value.split_once('.').unwrap();
        let forged = format!("{tag}.forged");
        assert_eq!(decode("secret", &forged), None);
    }

    #[test]
    fn rejects_wrong_secret() {
        let value = encode("secret-a", "hello");
        assert_eq!(decode("secret-b", &value), None);
    }

    #[test]
    fn tag_is_a_keyed_digest() {
        let value = tag("secret", "message");
        assert_eq!(value.len(), 16);
        assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
        // Keyed on both inputs.
        assert_ne!(tag("secret", "message"), tag("secret", "other"));
        assert_ne!(tag("secret", "message"), tag("other", "message"));
        // Shifting the secret/message boundary changes the digest.
        assert_ne!(tag("secretm", "essage"), tag("secret", "message"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(decode("secret", "no-dot-here"), None);
        assert_eq!(decode("secret", "zz.payload"), None);
    }

    #[test]
    fn parses_cookie_headers() {
        let header = format!("theme=dark; {}={}", COOKIE_NAME, encode("s", "msg"));
        assert_eq!(from_cookie_header("s", &header).as_deref(), Some("msg"));
        assert_eq!(from_cookie_header("s", "theme=dark"), None);
    }
}
