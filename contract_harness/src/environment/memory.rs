//!
//! The in-memory execution environment.
//!

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::environment::receipt::Receipt;
use crate::environment::Environment;
use crate::error::Error;
use crate::error::Result;
use crate::utils;

///
/// The deterministic offline execution environment.
///
/// Addresses are assigned the way the EVM `CREATE` does it. Nothing is executed: calls return
/// the programmed results.
///
#[derive(Debug)]
pub struct MemoryEnvironment {
    /// The mutable state.
    state: Mutex<State>,
}

///
/// The recorded construction transaction.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// The sender account.
    pub sender: web3::types::Address,
    /// The assigned contract address.
    pub address: web3::types::Address,
    /// The construction code.
    pub code: Vec<u8>,
}

///
/// The submitted transaction.
///
#[derive(Debug, Clone)]
struct Transaction {
    /// The input data.
    input: Vec<u8>,
    /// The receipt to return once confirmed.
    receipt: Receipt,
    /// The number of receipt polls left before confirmation.
    polls_left: usize,
}

///
/// The in-memory environment state.
///
#[derive(Debug, Default)]
struct State {
    /// The managed accounts.
    accounts: Vec<web3::types::Address>,
    /// The account nonces.
    nonces: HashMap<web3::types::Address, u64>,
    /// The submitted transactions by hash.
    transactions: HashMap<web3::types::H256, Transaction>,
    /// The number of submitted transactions.
    transaction_count: u64,
    /// The accepted constructions in submission order.
    constructions: Vec<Construction>,
    /// The number of attempted constructions.
    construction_attempts: usize,
    /// The construction attempt indexes to reject.
    rejected_constructions: BTreeSet<usize>,
    /// The construction attempt indexes to revert.
    reverted_constructions: BTreeSet<usize>,
    /// The calldata of transactions to revert.
    reverted_transactions: BTreeSet<Vec<u8>>,
    /// The receipt polls to answer with `None` before confirming.
    confirmation_delay: usize,
    /// Whether to never confirm anything.
    is_unconfirmed: bool,
    /// The programmed call results by calldata.
    call_results: HashMap<Vec<u8>, Vec<u8>>,
    /// The executed read-only calls.
    calls: Vec<(web3::types::Address, Vec<u8>)>,
}

impl MemoryEnvironment {
    /// The endpoint description.
    pub const ENDPOINT: &'static str = "memory";

    /// The gas reported for every transaction.
    pub const GAS_USED: u64 = 21_000;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(accounts: Vec<web3::types::Address>) -> Self {
        Self {
            state: Mutex::new(State {
                accounts,
                ..State::default()
            }),
        }
    }

    ///
    /// Rejects the construction attempt with the zero-based `index`.
    ///
    pub fn reject_construction(self, index: usize) -> Self {
        self.state
            .lock()
            .expect("Sync")
            .rejected_constructions
            .insert(index);
        self
    }

    ///
    /// Confirms the construction attempt with the zero-based `index` with a failed status.
    ///
    pub fn revert_construction(self, index: usize) -> Self {
        self.state
            .lock()
            .expect("Sync")
            .reverted_constructions
            .insert(index);
        self
    }

    ///
    /// Confirms transactions with `calldata` with a failed status.
    ///
    pub fn revert_transaction(self, calldata: Vec<u8>) -> Self {
        self.state
            .lock()
            .expect("Sync")
            .reverted_transactions
            .insert(calldata);
        self
    }

    ///
    /// Answers the first `polls` receipt requests of each transaction with `None`.
    ///
    pub fn with_confirmation_delay(self, polls: usize) -> Self {
        self.state.lock().expect("Sync").confirmation_delay = polls;
        self
    }

    ///
    /// Never confirms any transaction.
    ///
    pub fn unconfirmed(self) -> Self {
        self.state.lock().expect("Sync").is_unconfirmed = true;
        self
    }

    ///
    /// Programs the result of read-only calls with `calldata`.
    ///
    pub fn with_call_result(self, calldata: Vec<u8>, output: Vec<u8>) -> Self {
        self.state
            .lock()
            .expect("Sync")
            .call_results
            .insert(calldata, output);
        self
    }

    ///
    /// Returns the accepted constructions in submission order.
    ///
    pub fn constructions(&self) -> Vec<Construction> {
        self.state.lock().expect("Sync").constructions.clone()
    }

    ///
    /// Returns the executed read-only calls.
    ///
    pub fn calls(&self) -> Vec<(web3::types::Address, Vec<u8>)> {
        self.state.lock().expect("Sync").calls.clone()
    }

    ///
    /// Returns the `CREATE` address for `sender` at `nonce`.
    ///
    pub fn create_address(sender: &web3::types::Address, nonce: u64) -> web3::types::Address {
        let mut stream = rlp::RlpStream::new_list(2);
        stream.append(sender);
        stream.append(&nonce);

        let hash = utils::keccak256(stream.out().as_ref());
        web3::types::Address::from_slice(
            &hash[utils::BYTE_LENGTH_FIELD - utils::BYTE_LENGTH_ETH_ADDRESS..],
        )
    }
}

impl State {
    ///
    /// Stores the transaction and returns its hash.
    ///
    fn submit(
        &mut self,
        input: Vec<u8>,
        contract_address: Option<web3::types::Address>,
        is_successful: bool,
    ) -> web3::types::H256 {
        self.transaction_count += 1;
        let transaction_hash = web3::types::H256::from_low_u64_be(self.transaction_count);
        let receipt = Receipt::new(
            transaction_hash,
            contract_address,
            web3::types::U256::from(MemoryEnvironment::GAS_USED),
            is_successful,
        );
        self.transactions.insert(
            transaction_hash,
            Transaction {
                input,
                receipt,
                polls_left: self.confirmation_delay,
            },
        );
        transaction_hash
    }

    ///
    /// Returns and increments the sender nonce.
    ///
    fn next_nonce(&mut self, sender: web3::types::Address) -> u64 {
        let nonce = self.nonces.entry(sender).or_default();
        let current = *nonce;
        *nonce += 1;
        current
    }
}

impl Environment for MemoryEnvironment {
    fn endpoint(&self) -> &str {
        Self::ENDPOINT
    }

    fn accounts(&self) -> Result<Vec<web3::types::Address>> {
        Ok(self.state.lock().expect("Sync").accounts.clone())
    }

    fn submit_construction(
        &self,
        sender: web3::types::Address,
        code: &[u8],
    ) -> Result<web3::types::H256> {
        let mut state = self.state.lock().expect("Sync");

        let index = state.construction_attempts;
        state.construction_attempts += 1;
        if state.rejected_constructions.contains(&index) {
            return Err(Error::Rpc {
                method: "eth_sendTransaction".to_owned(),
                code: -32000,
                message: format!("construction #{index} rejected"),
            });
        }

        let nonce = state.next_nonce(sender);
        let address = Self::create_address(&sender, nonce);
        state.constructions.push(Construction {
            sender,
            address,
            code: code.to_vec(),
        });

        let is_successful = !state.reverted_constructions.contains(&index);
        Ok(state.submit(code.to_vec(), is_successful.then_some(address), is_successful))
    }

    fn submit_transaction(
        &self,
        sender: web3::types::Address,
        _address: web3::types::Address,
        calldata: &[u8],
    ) -> Result<web3::types::H256> {
        let mut state = self.state.lock().expect("Sync");
        state.next_nonce(sender);
        let is_successful = !state.reverted_transactions.contains(calldata);
        Ok(state.submit(calldata.to_vec(), None, is_successful))
    }

    fn transaction_receipt(&self, transaction_hash: web3::types::H256) -> Result<Option<Receipt>> {
        let mut state = self.state.lock().expect("Sync");
        if state.is_unconfirmed {
            return Ok(None);
        }

        let transaction = state
            .transactions
            .get_mut(&transaction_hash)
            .ok_or(Error::TransactionNotFound { transaction_hash })?;
        if transaction.polls_left > 0 {
            transaction.polls_left -= 1;
            return Ok(None);
        }
        Ok(Some(transaction.receipt.clone()))
    }

    fn call(
        &self,
        _sender: web3::types::Address,
        address: web3::types::Address,
        calldata: &[u8],
    ) -> Result<Vec<u8>> {
        let mut state = self.state.lock().expect("Sync");
        state.calls.push((address, calldata.to_vec()));
        Ok(state.call_results.get(calldata).cloned().unwrap_or_default())
    }

    fn transaction_input(&self, transaction_hash: web3::types::H256) -> Result<Vec<u8>> {
        self.state
            .lock()
            .expect("Sync")
            .transactions
            .get(&transaction_hash)
            .map(|transaction| transaction.input.clone())
            .ok_or(Error::TransactionNotFound { transaction_hash })
    }
}
