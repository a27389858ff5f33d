//! Content-store webhook signature verification.
//!
//! The platform signs `<timestamp>.<body>` with the shared secret and
//! delivers `sanity-webhook-signature: t=<millis>,v1=<base64url digest>`.
//! Only the MAC is enforced; replaying a delivery is harmless because
//! every downstream operation is idempotent.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub const SIGNATURE_HEADER: &str = "sanity-webhook-signature";

type HmacSha256 = Hmac<Sha256>;

/// Verify a signature header against the raw request body.
///
/// Comparison is constant-time via the MAC's own verifier. Any parse
/// failure (header shape, base64) counts as an invalid signature.
pub fn verify_signature(secret: &str, header: &str, body: &[u8]) -> bool {
    let Some((timestamp, signature)) = parse_header(header) else {
        return false;
    };
    let Ok(digest) = URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);
    mac.verify_slice(&digest).is_ok()
}

/// Produce a signature header for a body. Used by delivery tooling and
/// tests; the inverse of `verify_signature`.
pub fn encode_signature_header(secret: &str, timestamp: i64, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body);
    let digest = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    format!("t={timestamp},v1={digest}")
}

/// Split `t=<timestamp>,v1=<signature>` into its parts.
fn parse_header(header: &str) -> Option<(&str, &str)> {
    let mut timestamp = None;
    let mut signature = None;
    for part in header.split(',') {
        let (name, value) = part.trim().split_once('=')?;
        match name {
            "t" => timestamp = Some(value),
            "v1" => signature = Some(value),
            _ => {}
        }
    }
    Some((timestamp?, signature?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";
    const BODY: &[u8] = br#"{"_type":"venue","_id":"v1"}"#;

    #[test]
    fn signed_header_verifies() {
        let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY);
        assert!(verify_signature(SECRET, &header, BODY));
    }

    #[test]
    fn tampered_body_fails() {
        let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY);
        assert!(!verify_signature(
            SECRET,
            &header,
            br#"{"_type":"venue","_id":"v2"}"#
        ));
    }

    #[test]
    fn wrong_secret_fails() {
        let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY);
        assert!(!verify_signature("other-secret", &header, BODY));
    }

    #[test]
    fn tampered_timestamp_fails() {
        let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY);
        let forged = header.replace("t=1700000000000", "t=1700000000001");
        assert!(!verify_signature(SECRET, &forged, BODY));
    }

    #[test]
    fn malformed_headers_fail() {
        assert!(!verify_signature(SECRET, "", BODY));
        assert!(!verify_signature(SECRET, "t=123", BODY));
        assert!(!verify_signature(SECRET, "v1=abc", BODY));
        assert!(!verify_signature(SECRET, "t=123,v1=!!not-base64!!", BODY));
    }
}
