//!
//! The `solc --standard-json` output error.
//!

use serde::Deserialize;

///
/// The `solc --standard-json` output error.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The error severity, `error`, `warning`, or `info`.
    pub severity: String,
    /// The error message.
    pub message: String,
    /// The error message with the source location.
    #[serde(default)]
    pub formatted_message: Option<String>,
}

impl Error {
    ///
    /// Whether the compilation has failed because of this message.
    ///
    pub fn is_error(&self) -> bool {
        self.severity.as_str() == "error"
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.formatted_message {
            Some(ref formatted_message) => write!(f, "{}", formatted_message.trim_end()),
            None => write!(f, "{}", self.message),
        }
    }
}
