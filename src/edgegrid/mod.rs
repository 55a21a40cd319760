//! EdgeGrid request signing (EG1-HMAC-SHA256).
//!
//! Akamai's OPEN APIs authenticate individual requests with a signed
//! `Authorization` header rather than a session token. The scheme:
//!
//! 1. A signing key is derived per request: HMAC-SHA256 of the timestamp,
//!    keyed with the client secret, base64-encoded.
//! 2. The request is canonicalized into a tab-separated string: method,
//!    scheme, host, path-with-query, signed headers (none here), the
//!    base64 SHA-256 hash of the POST body, and the header-so-far.
//! 3. The canonical string is HMAC-SHA256 signed with the derived key and
//!    appended to the header as `signature=...`.
//!
//! POST bodies are hashed up to [`MAX_BODY_SIZE`] bytes, Akamai's default
//! cap; larger bodies are truncated for hashing only, never for transport.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Url;
use sha2::{Digest, Sha256};
use tracing::trace;
use uuid::Uuid;

use crate::config::EdgeRc;

type HmacSha256 = Hmac<Sha256>;

/// Maximum number of POST body bytes included in the content hash.
pub const MAX_BODY_SIZE: usize = 131_072;

/// EdgeGrid credential set used to sign outgoing requests.
///
/// Carries no connection state; one instance is shared for the lifetime of
/// the process and signs each request independently.
#[derive(Debug, Clone)]
pub struct EdgeGridAuth {
    client_token: String,
    client_secret: String,
    access_token: String,
}

impl EdgeGridAuth {
    /// Create a signer from raw credential strings.
    #[must_use]
    pub fn new(
        client_token: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client_token: client_token.into(),
            client_secret: client_secret.into(),
            access_token: access_token.into(),
        }
    }

    /// Produce the `Authorization` header value for one request.
    ///
    /// Generates a fresh UTC timestamp and nonce; everything else is a pure
    /// function of the credentials and the request itself.
    #[must_use]
    pub fn auth_header(&self, method: &str, url: &Url, body: &[u8]) -> String {
        let timestamp = Utc::now().format("%Y%m%dT%H:%M:%S+0000").to_string();
        let nonce = Uuid::new_v4().to_string();
        self.auth_header_with(method, url, body, &timestamp, &nonce)
    }

    fn auth_header_with(
        &self,
        method: &str,
        url: &Url,
        body: &[u8],
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let unsigned = format!(
            "EG1-HMAC-SHA256 client_token={};access_token={};timestamp={};nonce={};",
            self.client_token, self.access_token, timestamp, nonce
        );
        let signature = self.signature(method, url, body, timestamp, &unsigned);
        format!("{unsigned}signature={signature}")
    }

    fn signature(
        &self,
        method: &str,
        url: &Url,
        body: &[u8],
        timestamp: &str,
        unsigned_header: &str,
    ) -> String {
        let data = data_to_sign(method, url, body, unsigned_header);
        trace!(%data, "signing request");
        let signing_key = base64_hmac(self.client_secret.as_bytes(), timestamp.as_bytes());
        base64_hmac(signing_key.as_bytes(), data.as_bytes())
    }
}

/// Canonicalize the request into the tab-separated string EdgeGrid signs.
fn data_to_sign(method: &str, url: &Url, body: &[u8], unsigned_header: &str) -> String {
    let content_hash = if method == "POST" && !body.is_empty() {
        let capped = &body[..body.len().min(MAX_BODY_SIZE)];
        BASE64.encode(Sha256::digest(capped))
    } else {
        String::new()
    };

    let path_and_query = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_owned(),
    };

    [
        method,
        url.scheme(),
        url.host_str().unwrap_or_default(),
        &path_and_query,
        "", // no signed headers
        &content_hash,
        unsigned_header,
    ]
    .join("\t")
}

fn base64_hmac(key: &[u8], data: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    BASE64.encode(mac.finalize().into_bytes())
}

impl From<&EdgeRc> for EdgeGridAuth {
    fn from(edgerc: &EdgeRc) -> Self {
        Self::new(
            &edgerc.client_token,
            &edgerc.client_secret,
            &edgerc.access_token,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> EdgeGridAuth {
        EdgeGridAuth::new("akab-client-token", "secret", "akab-access-token")
    }

    const TIMESTAMP: &str = "20260101T12:00:00+0000";
    const NONCE: &str = "f3b2bfcf-46d1-4d04-9a14-5d7801b0f4f1";

    #[test]
    fn test_header_structure_and_field_order() {
        let url = Url::parse("https://akaa-host.luna.akamaiapis.net/eccu-api/v1/requests").unwrap();
        let header = auth().auth_header_with("POST", &url, b"{}", TIMESTAMP, NONCE);

        assert!(header.starts_with("EG1-HMAC-SHA256 client_token=akab-client-token;"));
        let client = header.find("client_token=").unwrap();
        let access = header.find("access_token=").unwrap();
        let timestamp = header.find("timestamp=").unwrap();
        let nonce = header.find("nonce=").unwrap();
        let signature = header.find("signature=").unwrap();
        assert!(client < access && access < timestamp && timestamp < nonce && nonce < signature);
        assert!(header.contains(&format!("timestamp={TIMESTAMP}")));
        assert!(header.contains(&format!("nonce={NONCE}")));
    }

    #[test]
    fn test_signature_is_deterministic_for_fixed_inputs() {
        let url = Url::parse("https://host.example/eccu-api/v1/requests").unwrap();
        let first = auth().auth_header_with("POST", &url, b"body", TIMESTAMP, NONCE);
        let second = auth().auth_header_with("POST", &url, b"body", TIMESTAMP, NONCE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_differing_bodies_produce_differing_signatures() {
        let url = Url::parse("https://host.example/eccu-api/v1/requests").unwrap();
        let one = auth().auth_header_with("POST", &url, b"alpha", TIMESTAMP, NONCE);
        let two = auth().auth_header_with("POST", &url, b"beta", TIMESTAMP, NONCE);
        assert_ne!(one, two);
    }

    #[test]
    fn test_get_requests_carry_no_content_hash() {
        let url = Url::parse("https://host.example/config?x=1").unwrap();
        let data = data_to_sign("GET", &url, b"", "EG1-HMAC-SHA256 ...");
        let fields: Vec<&str> = data.split('\t').collect();
        assert_eq!(fields[0], "GET");
        assert_eq!(fields[3], "/config?x=1");
        assert_eq!(fields[5], "", "content hash must be empty for GET");
    }

    #[test]
    fn test_body_hash_capped_at_max_body_size() {
        let url = Url::parse("https://host.example/x").unwrap();
        let capped = vec![b'a'; MAX_BODY_SIZE];
        let oversized = vec![b'a'; MAX_BODY_SIZE + 10];
        let one = data_to_sign("POST", &url, &capped, "hdr");
        let two = data_to_sign("POST", &url, &oversized, "hdr");
        assert_eq!(one, two);
    }
}
