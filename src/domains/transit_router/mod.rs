//! Transit Router API domain.
//!
//! This module is the transport adapter between the tool layer and the
//! remote Transit Router control-plane API. It owns the signed HTTP client
//! and exposes a single generic entry point, [`TransitRouterApi::invoke`],
//! which takes an action name plus a parameter mapping and returns the
//! decoded `Result` object of the response.
//!
//! ## Architecture
//!
//! - `client.rs` - The [`TransitRouterApi`] trait and the HTTP implementation
//! - `signer.rs` - HMAC-SHA256 request signing
//! - `form.rs` - Flattening of parameter mappings into form pairs
//! - `casing.rs` - snake_case / PascalCase field name conversion
//! - `error.rs` - Adapter error types

mod casing;
mod client;
mod error;
mod form;
mod signer;
#[cfg(test)]
pub mod testing;

pub use casing::{snake_case_keys, to_pascal_case, to_snake_case};
pub use client::{API_VERSION, SERVICE_NAME, TransitRouterApi, VolcengineClient, decode_response};
pub use error::{ApiError, ApiResult, RemoteErrorKind};
pub use form::{encode_form, flatten_params};
pub use signer::{SignedHeaders, Signer, SigningRequest, canonical_query};

/// Parameter mapping handed to the adapter for a single call.
///
/// Keys are snake_case parameter names; `null` values mark parameters the
/// caller did not provide and are dropped before the request is sent.
pub type Params = serde_json::Map<String, serde_json::Value>;
