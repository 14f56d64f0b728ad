//! In-memory [`TransitRouterApi`] used by the tool layer tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{ApiError, ApiResult, Params, TransitRouterApi};

/// How the fake answers every call.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Return `{"action": ..., "params": ...}` so callers can see what was sent.
    Echo,
    /// Return this value.
    Fixed(Value),
    /// Fail with a remote error carrying this code and message.
    Remote { status: u16, code: String, message: String },
}

/// Records every `invoke` and answers according to its [`Reply`].
#[derive(Debug)]
pub struct RecordingApi {
    reply: Reply,
    calls: Mutex<Vec<(String, Params)>>,
}

impl RecordingApi {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::new(Reply::Echo)
    }

    pub fn failing(status: u16, code: &str, message: &str) -> Self {
        Self::new(Reply::Remote {
            status,
            code: code.to_string(),
            message: message.to_string(),
        })
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<(String, Params)> {
        self.calls.lock().unwrap().clone()
    }

    /// Parameters of the only call received.
    pub fn single_call(&self) -> (String, Params) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl TransitRouterApi for RecordingApi {
    async fn invoke(&self, action: &str, params: Params) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((action.to_string(), params.clone()));

        match &self.reply {
            Reply::Echo => Ok(json!({ "action": action, "params": Value::Object(params) })),
            Reply::Fixed(value) => Ok(value.clone()),
            Reply::Remote {
                status,
                code,
                message,
            } => Err(ApiError::remote(*status, code, message, "req-fake")),
        }
    }
}
