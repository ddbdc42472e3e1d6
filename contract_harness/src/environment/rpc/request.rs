//!
//! The JSON-RPC request.
//!

use serde::Serialize;

///
/// The JSON-RPC 2.0 request envelope.
///
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    /// The protocol version.
    pub jsonrpc: &'static str,
    /// The request identifier.
    pub id: u64,
    /// The method name.
    pub method: &'a str,
    /// The positional parameters.
    pub params: serde_json::Value,
}

impl<'a> Request<'a> {
    /// The protocol version.
    pub const VERSION: &'static str = "2.0";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(id: u64, method: &'a str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: Self::VERSION,
            id,
            method,
            params,
        }
    }
}
