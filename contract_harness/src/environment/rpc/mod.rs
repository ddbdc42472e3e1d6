//!
//! The Ethereum JSON-RPC environment.
//!

pub mod request;
pub mod response;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::environment::receipt::Receipt;
use crate::environment::Environment;
use crate::error::Error;
use crate::error::Result;

use self::request::Request;
use self::response::Response;

///
/// The Ethereum JSON-RPC environment over HTTP.
///
/// Transactions are signed by the node-managed accounts.
///
#[derive(Debug)]
pub struct RpcEnvironment {
    /// The endpoint URL.
    endpoint: String,
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The next request identifier.
    next_id: AtomicU64,
}

impl RpcEnvironment {
    ///
    /// A shortcut constructor.
    ///
    /// The `request_timeout` bounds every HTTP request.
    ///
    pub fn new(endpoint: String, request_timeout: Duration) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|error| Error::Connection {
                endpoint: endpoint.clone(),
                diagnostic: error.to_string(),
            })?;
        Ok(Self {
            endpoint,
            http_client,
            next_id: AtomicU64::new(1),
        })
    }

    ///
    /// Sends the request and parses the result.
    ///
    pub fn request<T>(&self, method: &str, params: serde_json::Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = Request::new(self.next_id.fetch_add(1, Ordering::Relaxed), method, params);
        let response: Response = self
            .http_client
            .post(self.endpoint.as_str())
            .json(&request)
            .send()
            .and_then(|response| response.json())
            .map_err(|error| self.connection_error(error))?;
        response.into_result(method)
    }

    ///
    /// Wraps the transport error.
    ///
    fn connection_error(&self, error: reqwest::Error) -> Error {
        Error::Connection {
            endpoint: self.endpoint.clone(),
            diagnostic: error.to_string(),
        }
    }
}

impl Environment for RpcEnvironment {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn accounts(&self) -> Result<Vec<web3::types::Address>> {
        self.request("eth_accounts", serde_json::json!([]))
    }

    fn submit_construction(
        &self,
        sender: web3::types::Address,
        code: &[u8],
    ) -> Result<web3::types::H256> {
        self.request(
            "eth_sendTransaction",
            serde_json::json!([{
                "from": sender,
                "data": web3::types::Bytes::from(code),
            }]),
        )
    }

    fn submit_transaction(
        &self,
        sender: web3::types::Address,
        address: web3::types::Address,
        calldata: &[u8],
    ) -> Result<web3::types::H256> {
        self.request(
            "eth_sendTransaction",
            serde_json::json!([{
                "from": sender,
                "to": address,
                "data": web3::types::Bytes::from(calldata),
            }]),
        )
    }

    fn transaction_receipt(&self, transaction_hash: web3::types::H256) -> Result<Option<Receipt>> {
        let receipt: Option<web3::types::TransactionReceipt> = self.request(
            "eth_getTransactionReceipt",
            serde_json::json!([transaction_hash]),
        )?;
        Ok(receipt.map(Receipt::from))
    }

    fn call(
        &self,
        sender: web3::types::Address,
        address: web3::types::Address,
        calldata: &[u8],
    ) -> Result<Vec<u8>> {
        let output: web3::types::Bytes = self.request(
            "eth_call",
            serde_json::json!([
                {
                    "from": sender,
                    "to": address,
                    "data": web3::types::Bytes::from(calldata),
                },
                "latest"
            ]),
        )?;
        Ok(output.0)
    }

    fn transaction_input(&self, transaction_hash: web3::types::H256) -> Result<Vec<u8>> {
        let transaction: Option<web3::types::Transaction> = self.request(
            "eth_getTransactionByHash",
            serde_json::json!([transaction_hash]),
        )?;
        transaction
            .map(|transaction| transaction.input.0)
            .ok_or(Error::TransactionNotFound { transaction_hash })
    }
}
