//!
//! The contract harness error.
//!

use std::path::PathBuf;
use std::time::Duration;

///
/// The contract harness error.
///
/// None of the variants is recovered locally. Every error aborts the run.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested contract or library is absent from the compiled output.
    #[error("Contract `{name}` not found in the compiled artifacts")]
    NotFound {
        /// The requested name.
        name: String,
    },
    /// The requested name matches several compilation units.
    #[error("Contract name `{name}` is ambiguous, candidates: {candidates:?}")]
    AmbiguousName {
        /// The requested name.
        name: String,
        /// The matching identifiers, sorted.
        candidates: Vec<String>,
    },
    /// Library placeholders remain in the bytecode after linking.
    #[error("Contract `{contract}` has unresolved library references: {unresolved:?}")]
    LinkResolution {
        /// The contract being linked.
        contract: String,
        /// The unresolved library identifiers or raw placeholders.
        unresolved: Vec<String>,
    },
    /// The environment rejected or reverted a construction transaction.
    #[error("Deployment of `{name}` failed: {diagnostic}")]
    Deployment {
        /// The deployed contract name.
        name: String,
        /// The environment diagnostic.
        diagnostic: String,
    },
    /// The environment is unreachable.
    #[error("Connection to `{endpoint}` failed: {diagnostic}")]
    Connection {
        /// The endpoint address.
        endpoint: String,
        /// The transport diagnostic.
        diagnostic: String,
    },
    /// The confirmation wait exceeded the configured timeout.
    #[error("Transaction {transaction_hash:?} was not confirmed within {elapsed:?}")]
    Timeout {
        /// The awaited transaction.
        transaction_hash: web3::types::H256,
        /// The time spent waiting.
        elapsed: Duration,
    },
    /// The JSON-RPC endpoint returned an error object.
    #[error("JSON-RPC method `{method}` failed with code {code}: {message}")]
    Rpc {
        /// The called method.
        method: String,
        /// The JSON-RPC error code.
        code: i64,
        /// The JSON-RPC error message.
        message: String,
    },
    /// The environment does not know the transaction.
    #[error("Transaction {transaction_hash:?} not found")]
    TransactionNotFound {
        /// The requested transaction.
        transaction_hash: web3::types::H256,
    },
    /// A confirmed non-construction transaction has a failed status.
    #[error("Transaction `{name}` reverted in {transaction_hash:?}")]
    TransactionFailed {
        /// The transaction name.
        name: String,
        /// The reverted transaction.
        transaction_hash: web3::types::H256,
    },
    /// The compiler failed or reported errors.
    #[error("Compilation failed: {message}")]
    Compilation {
        /// The compiler diagnostic chain.
        message: String,
    },
    /// The ABI encoding or decoding failed.
    #[error("Contract interface error: {0}")]
    Interface(#[from] web3::ethabi::Error),
    /// The bytecode is not valid hexadecimal.
    #[error("Invalid bytecode of `{name}`: {reason}")]
    InvalidBytecode {
        /// The contract name.
        name: String,
        /// The decoding error.
        reason: String,
    },
    /// A file side channel failed.
    #[error("File {path:?} writing error: {error}")]
    Io {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
}

///
/// The contract harness result.
///
pub type Result<T> = std::result::Result<T, Error>;
