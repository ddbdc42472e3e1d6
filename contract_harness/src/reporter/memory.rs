//!
//! The in-memory reporter.
//!

use std::sync::Arc;
use std::sync::Mutex;

use crate::error::Result;
use crate::reporter::Reporter;
use crate::reporter::TransactionReport;

///
/// The reported event.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A confirmed transaction.
    Transaction {
        /// The transaction name.
        name: String,
        /// The transaction hash.
        transaction_hash: web3::types::H256,
        /// The gas used.
        gas_used: web3::types::U256,
        /// The created contract address.
        contract_address: Option<web3::types::Address>,
        /// The raw calldata.
        calldata: Option<Vec<u8>>,
    },
    /// A bytecode size.
    BytecodeSize {
        /// The contract name.
        name: String,
        /// The byte length.
        size: usize,
        /// Whether the contract is a library.
        is_library: bool,
    },
    /// A substituted library address.
    LibraryLinked {
        /// The linked contract.
        contract: String,
        /// The library identifier.
        library: String,
        /// The library address.
        address: web3::types::Address,
    },
}

///
/// The reporter collecting records for later inspection.
///
/// Clones share the same records.
///
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    /// The collected records.
    records: Arc<Mutex<Vec<Record>>>,
    /// Whether the calldata is requested.
    requires_calldata: bool,
}

impl MemoryReporter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(requires_calldata: bool) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            requires_calldata,
        }
    }

    ///
    /// Returns the collected records.
    ///
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().expect("Sync").clone()
    }

    ///
    /// Returns the names of the confirmed transactions in order.
    ///
    pub fn transaction_names(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                Record::Transaction { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    ///
    /// Pushes the record.
    ///
    fn push(&self, record: Record) {
        self.records.lock().expect("Sync").push(record);
    }
}

impl Reporter for MemoryReporter {
    fn requires_calldata(&self) -> bool {
        self.requires_calldata
    }

    fn transaction(&self, report: &TransactionReport) -> Result<()> {
        self.push(Record::Transaction {
            name: report.name.to_owned(),
            transaction_hash: report.receipt.transaction_hash,
            gas_used: report.receipt.gas_used,
            contract_address: report.receipt.contract_address,
            calldata: report.calldata.map(<[u8]>::to_vec),
        });
        Ok(())
    }

    fn bytecode_size(&self, name: &str, size: usize, is_library: bool) {
        self.push(Record::BytecodeSize {
            name: name.to_owned(),
            size,
            is_library,
        });
    }

    fn library_linked(&self, contract: &str, library: &str, address: &web3::types::Address) {
        self.push(Record::LibraryLinked {
            contract: contract.to_owned(),
            library: library.to_owned(),
            address: *address,
        });
    }
}
