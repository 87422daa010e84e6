use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RegistryError;

/// Outcome of a registration API call.
///
/// `data` is populated on success, `error` on failure, never both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub type RegistrationResult = ApiResult;

impl ApiResult {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl From<Result<Value, RegistryError>> for ApiResult {
    fn from(result: Result<Value, RegistryError>) -> Self {
        match result {
            Ok(data) => ApiResult::ok(data),
            Err(err) => ApiResult::failure(err.message()),
        }
    }
}
