//! Transit Router API client.
//!
//! [`TransitRouterApi`] is the seam between the tool layer and the network:
//! the tool layer only ever sees `invoke(action, params)`, which keeps it
//! testable against an in-memory fake. [`VolcengineClient`] is the
//! production implementation speaking the signed form-POST protocol.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{
    ApiError, ApiResult, Params,
    casing::snake_case_keys,
    form::{encode_form, flatten_params},
    signer::{Signer, SigningRequest, canonical_query},
};
use crate::core::config::CloudConfig;

/// API version every action is invoked with.
pub const API_VERSION: &str = "2020-04-01";

/// Service name used in the credential scope.
pub const SERVICE_NAME: &str = "transitrouter";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MAX_ERROR_BODY: usize = 512;

/// Generic access to the Transit Router API.
///
/// One call maps to exactly one outbound request. Implementations must not
/// retry, validate or rename anything: failures are returned as-is.
#[async_trait]
pub trait TransitRouterApi: Send + Sync {
    /// Invoke `action` with the given parameter mapping.
    ///
    /// Returns the `Result` object of the response with snake_case keys.
    async fn invoke(&self, action: &str, params: Params) -> ApiResult<Value>;
}

/// Signed HTTP client for the Volcengine OpenAPI gateway.
#[derive(Debug, Clone)]
pub struct VolcengineClient {
    http: reqwest::Client,
    signer: Signer,
    scheme: String,
    host: String,
}

impl VolcengineClient {
    /// Create a client from the cloud configuration.
    pub fn new(config: &CloudConfig) -> ApiResult<Self> {
        let access_key = config
            .access_key
            .clone()
            .ok_or(ApiError::MissingCredentials("access key"))?;
        let secret_key = config
            .secret_key
            .clone()
            .ok_or(ApiError::MissingCredentials("secret key"))?;

        let signer = Signer::new(access_key, secret_key, config.region.clone(), SERVICE_NAME)
            .with_session_token(config.session_token.clone());

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            signer,
            scheme: config.scheme.clone(),
            host: config.host.clone(),
        })
    }

    /// Endpoint host requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl TransitRouterApi for VolcengineClient {
    #[instrument(skip(self, params))]
    async fn invoke(&self, action: &str, params: Params) -> ApiResult<Value> {
        let body = encode_form(&flatten_params(&params))?;
        let query = canonical_query(&[("Action", action), ("Version", API_VERSION)]);

        let signed = self.signer.sign(
            &SigningRequest {
                method: "POST",
                host: &self.host,
                path: "/",
                query: &query,
                content_type: FORM_CONTENT_TYPE,
                body: body.as_bytes(),
            },
            Utc::now(),
        )?;

        let url = format!("{}://{}/?{}", self.scheme, self.host, query);
        debug!(region = self.signer.region(), "POST {} ({} bytes)", url, body.len());

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("X-Date", &signed.x_date)
            .header("X-Content-Sha256", &signed.x_content_sha256)
            .header(AUTHORIZATION, &signed.authorization);
        if let Some(token) = &signed.security_token {
            request = request.header("X-Security-Token", token);
        }

        let response = request.body(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let result = decode_response(status, &text);
        if let Err(ApiError::Remote { code, kind, request_id, .. }) = &result {
            warn!(%code, %kind, %request_id, "{} rejected by the API", action);
        }
        result
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    #[serde(default)]
    response_metadata: ResponseMetadata,
    #[serde(default)]
    result: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResponseMetadata {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    error: Option<RemoteErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RemoteErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Decode a raw API response.
///
/// Error envelopes become [`ApiError::Remote`]; a successful envelope
/// yields its `Result` object (or an empty object) with snake_case keys.
pub fn decode_response(status: u16, body: &str) -> ApiResult<Value> {
    let success = (200..300).contains(&status);

    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !success => {
            return Err(ApiError::Status {
                status,
                body: truncate(body, MAX_ERROR_BODY),
            });
        }
        Err(e) => return Err(ApiError::decode(e.to_string())),
    };

    let request_id = envelope.response_metadata.request_id.unwrap_or_default();
    debug!(%request_id, status, "API response received");

    if let Some(error) = envelope.response_metadata.error {
        return Err(ApiError::remote(status, error.code, error.message, request_id));
    }
    if !success {
        return Err(ApiError::Status {
            status,
            body: truncate(body, MAX_ERROR_BODY),
        });
    }

    match envelope.result {
        None | Some(Value::Null) => Ok(Value::Object(Params::new())),
        Some(result) => Ok(snake_case_keys(result)),
    }
}

fn truncate(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
