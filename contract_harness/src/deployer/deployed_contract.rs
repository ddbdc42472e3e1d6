//!
//! The deployed contract.
//!

use crate::environment::receipt::Receipt;

///
/// The contract confirmed on-chain.
///
#[derive(Debug, Clone)]
pub struct DeployedContract {
    /// The contract name.
    pub name: String,
    /// The assigned address.
    pub address: web3::types::Address,
    /// The contract interface.
    pub interface: web3::ethabi::Contract,
    /// The construction receipt.
    pub receipt: Receipt,
}

impl DeployedContract {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: String,
        address: web3::types::Address,
        interface: web3::ethabi::Contract,
        receipt: Receipt,
    ) -> Self {
        Self {
            name,
            address,
            interface,
            receipt,
        }
    }
}
