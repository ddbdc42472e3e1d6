//!
//! The transaction receipt.
//!

///
/// The confirmed transaction receipt.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The transaction hash.
    pub transaction_hash: web3::types::H256,
    /// The created contract address, for constructions.
    pub contract_address: Option<web3::types::Address>,
    /// The gas used by the transaction.
    pub gas_used: web3::types::U256,
    /// Whether the execution has succeeded.
    pub is_successful: bool,
}

impl Receipt {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        transaction_hash: web3::types::H256,
        contract_address: Option<web3::types::Address>,
        gas_used: web3::types::U256,
        is_successful: bool,
    ) -> Self {
        Self {
            transaction_hash,
            contract_address,
            gas_used,
            is_successful,
        }
    }
}

impl From<web3::types::TransactionReceipt> for Receipt {
    fn from(receipt: web3::types::TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            contract_address: receipt.contract_address,
            gas_used: receipt.gas_used.unwrap_or_default(),
            // Pre-Byzantium receipts carry no status.
            is_successful: receipt.status.map_or(true, |status| !status.is_zero()),
        }
    }
}
