//!
//! The JSON-RPC response.
//!

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;
use crate::error::Result;

///
/// The JSON-RPC 2.0 response envelope.
///
#[derive(Debug, Deserialize)]
pub struct Response {
    /// The method result, `null` or absent on errors.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// The error object.
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

///
/// The JSON-RPC 2.0 error object.
///
#[derive(Debug, Deserialize)]
pub struct ErrorObject {
    /// The error code.
    pub code: i64,
    /// The error message.
    pub message: String,
}

impl Response {
    /// The code reported for results of an unexpected shape.
    const CODE_INVALID_RESULT: i64 = -32700;

    ///
    /// Converts the envelope into the result of `method`.
    ///
    pub fn into_result<T>(self, method: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if let Some(error) = self.error {
            return Err(Error::Rpc {
                method: method.to_owned(),
                code: error.code,
                message: error.message,
            });
        }

        serde_json::from_value(self.result.unwrap_or(serde_json::Value::Null)).map_err(|error| {
            Error::Rpc {
                method: method.to_owned(),
                code: Self::CODE_INVALID_RESULT,
                message: format!("Result parsing error: {error}"),
            }
        })
    }
}
