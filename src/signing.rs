//! Request signing for OKX API authentication.
//!
//! OKX authenticates each request with an HMAC-SHA256 tag computed over the
//! concatenation of timestamp, HTTP method, request path, and body. The tag
//! travels base64-encoded in the `OK-ACCESS-SIGN` header, next to the exact
//! timestamp it was computed over.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Timestamp format accepted by the OKX API: UTC with millisecond precision
/// and a literal trailing `Z`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Returns the current UTC instant formatted for the `OK-ACCESS-TIMESTAMP`
/// header.
///
/// The returned string must be byte-identical between the signature input
/// and the transmitted header; callers capture it once per request.
pub fn timestamp_now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Computes the base64-encoded HMAC-SHA256 signature for a single request.
///
/// The prehash string is `timestamp + method + request_path + body` with no
/// separators. `request_path` is the path plus any query string, without
/// scheme or host. Deterministic over its inputs; an empty secret key still
/// yields a valid (degenerate) tag rather than an error.
pub fn sign(
    secret_key: &str,
    timestamp: &str,
    method: &str,
    request_path: &str,
    body: &str,
) -> String {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC can take key of any size");

    mac.update(timestamp.as_bytes());
    mac.update(method.as_bytes());
    mac.update(request_path.as_bytes());
    mac.update(body.as_bytes());

    STANDARD.encode(mac.finalize().into_bytes())
}
