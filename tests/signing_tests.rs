//! Unit tests for request signing
//!
//! These tests pin the exact signature construction: HMAC-SHA256 over
//! `timestamp + method + request_path + body`, base64-encoded with the
//! standard alphabet and padding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use okx_wallet::signing::{sign, timestamp_now};

// ============================================================================
// CONSTANTS
// ============================================================================

const GOLDEN_SECRET: &str = "abc";
const GOLDEN_TIMESTAMP: &str = "2020-01-01T00:00:00.000Z";
const GOLDEN_METHOD: &str = "GET";
const GOLDEN_PATH: &str = "/api/v5/public/status";
const GOLDEN_BODY: &str = "";

/// Known-good signature for the golden inputs above, computed once with
/// the HMAC-SHA256 construction and pinned for interoperability.
const GOLDEN_SIGNATURE: &str = "qsqYEQCI2Fm0DgrMNLOeVHLOJ/iGy5i+sGeuxbrnS30=";

fn golden_signature() -> String {
    sign(
        GOLDEN_SECRET,
        GOLDEN_TIMESTAMP,
        GOLDEN_METHOD,
        GOLDEN_PATH,
        GOLDEN_BODY,
    )
}

// ============================================================================
// TESTS
// ============================================================================

/// Test that the golden vector reproduces across implementations
/// What is tested: Exact signature bytes for fixed inputs
/// Why: The exchange verifies this construction byte-for-byte
#[test]
fn test_sign_golden_vector() {
    assert_eq!(golden_signature(), GOLDEN_SIGNATURE);
}

/// Test that signing is deterministic
/// What is tested: Repeated calls over identical inputs agree
/// Why: Signatures must be reproducible for interoperability testing
#[test]
fn test_sign_deterministic() {
    assert_eq!(golden_signature(), golden_signature());
}

/// Test that the output is a padded standard-alphabet base64 tag
/// What is tested: Signature decodes to the raw 32-byte HMAC-SHA256 output
/// Why: The exchange expects standard base64 with padding, not URL-safe
#[test]
fn test_sign_output_is_base64_of_32_bytes() {
    let decoded = STANDARD
        .decode(golden_signature())
        .expect("signature must be valid standard base64");
    assert_eq!(decoded.len(), 32);
}

/// Test that every input byte influences the signature
/// What is tested: Changing any single input yields a different tag
/// Why: Guards against accidentally dropping an input from the prehash
#[test]
fn test_sign_sensitivity_to_each_input() {
    let base = golden_signature();

    let changed_secret = sign(
        "abd",
        GOLDEN_TIMESTAMP,
        GOLDEN_METHOD,
        GOLDEN_PATH,
        GOLDEN_BODY,
    );
    let changed_timestamp = sign(
        GOLDEN_SECRET,
        "2020-01-01T00:00:00.001Z",
        GOLDEN_METHOD,
        GOLDEN_PATH,
        GOLDEN_BODY,
    );
    let changed_method = sign(
        GOLDEN_SECRET,
        GOLDEN_TIMESTAMP,
        "POST",
        GOLDEN_PATH,
        GOLDEN_BODY,
    );
    let changed_path = sign(
        GOLDEN_SECRET,
        GOLDEN_TIMESTAMP,
        GOLDEN_METHOD,
        "/api/v5/public/statui",
        GOLDEN_BODY,
    );
    let changed_body = sign(
        GOLDEN_SECRET,
        GOLDEN_TIMESTAMP,
        GOLDEN_METHOD,
        GOLDEN_PATH,
        "{}",
    );

    for changed in [
        changed_secret,
        changed_timestamp,
        changed_method,
        changed_path,
        changed_body,
    ] {
        assert_ne!(base, changed);
    }
}

/// Test that an empty secret key still signs
/// What is tested: Degenerate key produces a valid tag, no panic
/// Why: Missing credentials surface as remote rejection, not local errors
#[test]
fn test_sign_empty_secret_key() {
    let signature = sign(
        "",
        GOLDEN_TIMESTAMP,
        GOLDEN_METHOD,
        GOLDEN_PATH,
        GOLDEN_BODY,
    );
    assert!(!signature.is_empty());
    assert_ne!(signature, golden_signature());
}

/// Test the timestamp header format
/// What is tested: `YYYY-MM-DDTHH:MM:SS.mmmZ`, millisecond precision, UTC
/// Why: The exchange rejects signatures whose header timestamp differs in shape
#[test]
fn test_timestamp_now_format() {
    let timestamp = timestamp_now();

    assert_eq!(timestamp.len(), 24);
    assert_eq!(&timestamp[10..11], "T");
    assert_eq!(&timestamp[19..20], ".");
    assert!(timestamp.ends_with('Z'));
    assert!(
        chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok(),
        "timestamp must parse as RFC 3339: {}",
        timestamp
    );
}

/// Test that the prehash concatenation carries no separators
/// What is tested: Inputs that shift bytes across field boundaries differ
/// Why: A separator-free concatenation means boundaries exist only by position
#[test]
fn test_sign_concatenation_has_no_separators() {
    // Same concatenated bytes split differently across method/path must
    // produce the same tag only when the full concatenation is identical.
    let a = sign(GOLDEN_SECRET, GOLDEN_TIMESTAMP, "GET", "/x", "");
    let b = sign(GOLDEN_SECRET, GOLDEN_TIMESTAMP, "GET/", "x", "");
    assert_eq!(a, b);
}
