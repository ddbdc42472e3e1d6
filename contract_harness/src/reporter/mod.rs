//!
//! The deployment reporter.
//!

pub mod console;
pub mod memory;

use crate::environment::receipt::Receipt;
use crate::error::Result;

///
/// The confirmed transaction report.
///
#[derive(Debug, Clone, Copy)]
pub struct TransactionReport<'a> {
    /// The transaction name, usually the contract or function name.
    pub name: &'a str,
    /// The transaction receipt.
    pub receipt: &'a Receipt,
    /// The raw calldata, if the reporter requires it.
    pub calldata: Option<&'a [u8]>,
}

///
/// The reporting side channel.
///
/// Reporters only observe the run and never change its outcome, except for failing file writes.
///
pub trait Reporter {
    ///
    /// Whether the raw calldata must be fetched for every transaction.
    ///
    fn requires_calldata(&self) -> bool {
        false
    }

    ///
    /// Reports a confirmed transaction.
    ///
    fn transaction(&self, report: &TransactionReport) -> Result<()>;

    ///
    /// Reports the size of the bytecode about to be deployed.
    ///
    fn bytecode_size(&self, name: &str, size: usize, is_library: bool);

    ///
    /// Reports the artifact chosen for a requested name.
    ///
    fn artifact_resolved(&self, _name: &str, _identifier: &str) {}

    ///
    /// Reports a library address substituted into a contract.
    ///
    fn library_linked(&self, _contract: &str, _library: &str, _address: &web3::types::Address) {}
}
