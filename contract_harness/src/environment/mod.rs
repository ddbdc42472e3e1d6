//!
//! The execution environment.
//!

pub mod confirmation;
pub mod memory;
pub mod receipt;
pub mod rpc;

use std::time::Instant;

use crate::error::Error;
use crate::error::Result;

use self::confirmation::Confirmation;
use self::receipt::Receipt;

///
/// The blockchain-compatible execution environment.
///
pub trait Environment {
    ///
    /// Returns the endpoint description used in diagnostics.
    ///
    fn endpoint(&self) -> &str;

    ///
    /// Returns the accounts managed by the environment.
    ///
    fn accounts(&self) -> Result<Vec<web3::types::Address>>;

    ///
    /// Submits a contract construction transaction.
    ///
    fn submit_construction(
        &self,
        sender: web3::types::Address,
        code: &[u8],
    ) -> Result<web3::types::H256>;

    ///
    /// Submits a state-changing transaction to a deployed contract.
    ///
    fn submit_transaction(
        &self,
        sender: web3::types::Address,
        address: web3::types::Address,
        calldata: &[u8],
    ) -> Result<web3::types::H256>;

    ///
    /// Returns the receipt if the transaction is already confirmed.
    ///
    fn transaction_receipt(&self, transaction_hash: web3::types::H256) -> Result<Option<Receipt>>;

    ///
    /// Executes a read-only call and returns the raw output.
    ///
    fn call(
        &self,
        sender: web3::types::Address,
        address: web3::types::Address,
        calldata: &[u8],
    ) -> Result<Vec<u8>>;

    ///
    /// Returns the raw input data of a submitted transaction.
    ///
    fn transaction_input(&self, transaction_hash: web3::types::H256) -> Result<Vec<u8>>;

    ///
    /// Blocks until the transaction is confirmed or the timeout elapses.
    ///
    fn wait_for_receipt(
        &self,
        transaction_hash: web3::types::H256,
        confirmation: &Confirmation,
    ) -> Result<Receipt> {
        let start = Instant::now();
        loop {
            if let Some(receipt) = self.transaction_receipt(transaction_hash)? {
                return Ok(receipt);
            }

            let elapsed = start.elapsed();
            if elapsed >= confirmation.timeout {
                return Err(Error::Timeout {
                    transaction_hash,
                    elapsed,
                });
            }
            std::thread::sleep(confirmation.poll_interval.min(confirmation.timeout - elapsed));
        }
    }
}
