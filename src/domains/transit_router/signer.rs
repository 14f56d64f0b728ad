//! HMAC-SHA256 request signing.
//!
//! Every request carries an `Authorization` header computed from a
//! canonical form of the request:
//!
//! ```text
//! METHOD \n PATH \n CANONICAL_QUERY \n CANONICAL_HEADERS \n SIGNED_HEADERS \n HEX(SHA256(body))
//! ```
//!
//! The string to sign is `HMAC-SHA256 \n X-Date \n scope \n HEX(SHA256(canonical))`
//! with scope `{date}/{region}/{service}/request`, and the signing key is
//! derived by chaining HMACs over the secret key, date, region, service
//! and the literal `request`.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use super::{ApiError, ApiResult};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "HMAC-SHA256";
const SCOPE_TERMINATOR: &str = "request";

/// The parts of an outgoing request that are covered by the signature.
#[derive(Debug, Clone)]
pub struct SigningRequest<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub path: &'a str,
    /// Query string, already in canonical form (see [`canonical_query`]).
    pub query: &'a str,
    pub content_type: &'a str,
    pub body: &'a [u8],
}

/// Headers to attach to a signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub x_date: String,
    pub x_content_sha256: String,
    pub authorization: String,
    pub security_token: Option<String>,
}

/// Request signer bound to one set of credentials and one region.
#[derive(Clone)]
pub struct Signer {
    access_key: String,
    secret_key: String,
    session_token: Option<String>,
    region: String,
    service: String,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .field("region", &self.region)
            .field("service", &self.service)
            .finish()
    }
}

impl Signer {
    /// Create a new signer.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
            region: region.into(),
            service: service.into(),
        }
    }

    /// Attach a temporary session token (sent as `X-Security-Token`).
    pub fn with_session_token(mut self, token: Option<String>) -> Self {
        self.session_token = token;
        self
    }

    /// Region this signer is scoped to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign a request at the given instant.
    pub fn sign(&self, request: &SigningRequest<'_>, now: DateTime<Utc>) -> ApiResult<SignedHeaders> {
        let x_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let short_date = &x_date[..8];
        let payload_hash = sha256_hex(request.body);

        let mut headers: Vec<(&str, &str)> = vec![
            ("content-type", request.content_type),
            ("host", request.host),
            ("x-content-sha256", payload_hash.as_str()),
            ("x-date", x_date.as_str()),
        ];
        if let Some(token) = &self.session_token {
            headers.push(("x-security-token", token.as_str()));
        }
        headers.sort_by(|a, b| a.0.cmp(b.0));

        let canonical_headers: String = headers
            .iter()
            .map(|(name, value)| format!("{}:{}\n", name, value.trim()))
            .collect();
        let signed_headers = headers
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(";");

        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            request.method.to_uppercase(),
            request.path,
            request.query,
            canonical_headers,
            signed_headers,
            payload_hash
        );

        let scope = format!(
            "{}/{}/{}/{}",
            short_date, self.region, self.service, SCOPE_TERMINATOR
        );
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            x_date,
            scope,
            sha256_hex(canonical_request.as_bytes())
        );

        let signing_key = self.signing_key(short_date)?;
        let signature = hmac_sha256_hex(&signing_key, string_to_sign.as_bytes())?;

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, self.access_key, scope, signed_headers, signature
        );

        Ok(SignedHeaders {
            x_date,
            x_content_sha256: payload_hash,
            authorization,
            security_token: self.session_token.clone(),
        })
    }

    fn signing_key(&self, short_date: &str) -> ApiResult<Vec<u8>> {
        let k_date = hmac_sha256(self.secret_key.as_bytes(), short_date.as_bytes())?;
        let k_region = hmac_sha256(&k_date, self.region.as_bytes())?;
        let k_service = hmac_sha256(&k_region, self.service.as_bytes())?;
        hmac_sha256(&k_service, SCOPE_TERMINATOR.as_bytes())
    }
}

/// Build a canonical query string: pairs sorted by key, RFC 3986 encoded.
pub fn canonical_query(pairs: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (urlencoding::encode(k).into_owned(), urlencoding::encode(v).into_owned()))
        .collect();
    encoded.sort();
    encoded
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> ApiResult<Vec<u8>> {
    Ok(keyed_mac(key, data)?.finalize().into_bytes().to_vec())
}

fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> ApiResult<String> {
    Ok(format!("{:x}", keyed_mac(key, data)?.finalize().into_bytes()))
}

fn keyed_mac(key: &[u8], data: &[u8]) -> ApiResult<HmacSha256> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| ApiError::Signing(e.to_string()))?;
    mac.update(data);
    Ok(mac)
}

fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}
