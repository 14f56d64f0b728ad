//! Transit Router API error types.

use std::fmt;

use thiserror::Error;

/// Result type for adapter operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Coarse category of a failure reported by the remote API.
///
/// The category is derived from the remote error code and HTTP status.
/// It only feeds logging; the remote code and message are always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// Bad credentials or insufficient permission.
    Authentication,
    /// Missing, malformed or out-of-range parameter.
    InvalidParameter,
    /// The resource is in a state that does not allow the operation.
    Conflict,
    /// A referenced resource does not exist.
    NotFound,
    /// The caller hit a rate limit.
    Throttled,
    /// Anything else.
    Other,
}

impl RemoteErrorKind {
    /// Classify a remote error code.
    pub fn classify(code: &str, status: u16) -> Self {
        const AUTH_CODES: &[&str] = &[
            "InvalidAccessKey",
            "InvalidCredential",
            "InvalidAuthorization",
            "SignatureDoesNotMatch",
            "InvalidSecretToken",
            "MissingAuthenticationToken",
            "AccessDenied",
            "Unauthorized",
        ];
        const THROTTLE_CODES: &[&str] = &[
            "FlowLimitExceeded",
            "AccountFlowLimitExceeded",
            "RequestLimitExceeded",
            "Throttling",
        ];

        if status == 401 || status == 403 || AUTH_CODES.iter().any(|c| code.starts_with(c)) {
            Self::Authentication
        } else if status == 429 || THROTTLE_CODES.iter().any(|c| code.starts_with(c)) {
            Self::Throttled
        } else if status == 404 || code.contains("NotFound") {
            Self::NotFound
        } else if status == 409
            || code.starts_with("IncorrectStatus")
            || code.starts_with("InvalidStatus")
            || code.starts_with("OperationDenied")
            || code.ends_with(".Conflict")
            || code.contains("InUse")
        {
            Self::Conflict
        } else if status == 400
            || code.starts_with("MissingParameter")
            || code.starts_with("InvalidParameter")
            || code.starts_with("InvalidParam")
        {
            Self::InvalidParameter
        } else {
            Self::Other
        }
    }

    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::InvalidParameter => "invalid_parameter",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::Throttled => "throttled",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while calling the Transit Router API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API rejected the request and returned an error body.
    #[error("{code}: {message} (RequestId: {request_id})")]
    Remote {
        kind: RemoteErrorKind,
        code: String,
        message: String,
        request_id: String,
        status: u16,
    },

    /// Non-success HTTP status without a decodable error body.
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Network or transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Malformed API response: {0}")]
    Decode(String),

    /// The request parameters could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Access key or secret key missing from the configuration.
    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// Request signing failed.
    #[error("Request signing failed: {0}")]
    Signing(String),
}

impl ApiError {
    /// Create a remote error, classifying its code.
    pub fn remote(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self::Remote {
            kind: RemoteErrorKind::classify(&code, status),
            code,
            message: message.into(),
            request_id: request_id.into(),
            status,
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Category of a remote failure, if this is one.
    pub fn kind(&self) -> Option<RemoteErrorKind> {
        match self {
            Self::Remote { kind, .. } => Some(*kind),
            Self::Status { status, .. } => Some(RemoteErrorKind::classify("", *status)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_remote_codes() {
        assert_eq!(
            RemoteErrorKind::classify("SignatureDoesNotMatch", 200),
            RemoteErrorKind::Authentication
        );
        assert_eq!(
            RemoteErrorKind::classify("InvalidTransitRouter.NotFound", 200),
            RemoteErrorKind::NotFound
        );
        assert_eq!(
            RemoteErrorKind::classify("IncorrectStatus.TransitRouterRouteTable", 200),
            RemoteErrorKind::Conflict
        );
        assert_eq!(
            RemoteErrorKind::classify("MissingParameter.TransitRouterId", 200),
            RemoteErrorKind::InvalidParameter
        );
        assert_eq!(
            RemoteErrorKind::classify("FlowLimitExceeded", 200),
            RemoteErrorKind::Throttled
        );
        assert_eq!(RemoteErrorKind::classify("InternalError", 500), RemoteErrorKind::Other);
    }

    #[test]
    fn test_classify_falls_back_to_status() {
        assert_eq!(RemoteErrorKind::classify("", 429), RemoteErrorKind::Throttled);
        assert_eq!(RemoteErrorKind::classify("", 403), RemoteErrorKind::Authentication);
    }

    #[test]
    fn test_remote_error_display_keeps_code_and_message() {
        let err = ApiError::remote(
            400,
            "InvalidParameter.DestinationCidrBlock",
            "The specified DestinationCidrBlock is invalid.",
            "20240102030405-abc",
        );
        assert_eq!(
            err.to_string(),
            "InvalidParameter.DestinationCidrBlock: The specified DestinationCidrBlock is invalid. (RequestId: 20240102030405-abc)"
        );
        assert_eq!(err.kind(), Some(RemoteErrorKind::InvalidParameter));
    }
}
