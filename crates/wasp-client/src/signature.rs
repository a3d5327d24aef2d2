//! # Request Signing
//!
//! Writes are authorized with an HTTP Signature (draft-cavage, `hs2019`)
//! made by the space controller's Ed25519 key:
//!
//! ```text
//! Authorization: Signature keyId="did:key:z6Mk...#z6Mk...",
//!     algorithm="hs2019",created=1700000000,expires=1700000300,
//!     headers="(created) (expires) (request-target) host",
//!     signature="<base64>"
//! ```
//!
//! The signed string is one `name: value` line per covered header, joined
//! with `\n`, in the order listed in `headers`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use url::Url;
use wasp_crypto::Identity;

/// Lifetime of a signature.
pub const SIGNATURE_TTL_SECS: i64 = 300;

/// Covered components, in signing order.
pub const COVERED_HEADERS: &str = "(created) (expires) (request-target) host";

/// The request fields a signature covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInput {
    /// Lower-cased HTTP method.
    pub method: String,
    /// Path plus query.
    pub target: String,
    /// `host[:port]`, port omitted when it is the scheme default.
    pub host: String,
    pub created: i64,
    pub expires: i64,
}

impl SignatureInput {
    /// Signature input for a request to `url`, valid from `now` for
    /// [`SIGNATURE_TTL_SECS`].
    pub fn new(method: &str, url: &Url, now: DateTime<Utc>) -> Self {
        let mut target = url.path().to_string();
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        Self {
            method: method.to_ascii_lowercase(),
            target,
            host,
            created: now.timestamp(),
            expires: (now + Duration::seconds(SIGNATURE_TTL_SECS)).timestamp(),
        }
    }
}

/// The exact bytes that are signed.
pub fn signing_string(input: &SignatureInput) -> String {
    format!(
        "(created): {}\n(expires): {}\n(request-target): {} {}\nhost: {}",
        input.created, input.expires, input.method, input.target, input.host
    )
}

/// `Authorization` header value for `input`, signed by `identity`.
pub fn authorization_header(identity: &Identity, input: &SignatureInput) -> String {
    let signature = identity.sign(signing_string(input).as_bytes());
    format!(
        "Signature keyId=\"{}\",algorithm=\"hs2019\",created={},expires={},headers=\"{}\",signature=\"{}\"",
        identity.key_id(),
        input.created,
        input.expires,
        COVERED_HEADERS,
        BASE64.encode(signature.as_bytes()),
    )
}
