//!
//! The deployed contract instance.
//!

use web3::ethabi::Token;

use crate::context::Context;
use crate::deployer::deployed_contract::DeployedContract;
use crate::environment::receipt::Receipt;
use crate::environment::Environment;
use crate::error::Error;
use crate::error::Result;

///
/// The live contract handle bound to the context.
///
pub struct Instance<'ctx, E>
where
    E: Environment,
{
    /// The deployed contract.
    contract: DeployedContract,
    /// The run context.
    context: &'ctx Context<E>,
}

impl<'ctx, E> Instance<'ctx, E>
where
    E: Environment,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: DeployedContract, context: &'ctx Context<E>) -> Self {
        Self { contract, context }
    }

    ///
    /// Returns the contract address.
    ///
    pub fn address(&self) -> web3::types::Address {
        self.contract.address
    }

    ///
    /// Returns the deployed contract.
    ///
    pub fn contract(&self) -> &DeployedContract {
        &self.contract
    }

    ///
    /// Calls the read-only `function` and decodes its outputs.
    ///
    pub fn call(&self, function: &str, arguments: &[Token]) -> Result<Vec<Token>> {
        let function = self.contract.interface.function(function)?;
        let calldata = function.encode_input(arguments)?;
        let output = self.call_raw(calldata.as_slice())?;
        Ok(function.decode_output(output.as_slice())?)
    }

    ///
    /// Executes the read-only call with raw calldata and returns the output unmodified.
    ///
    pub fn call_raw(&self, calldata: &[u8]) -> Result<Vec<u8>> {
        self.context
            .environment()
            .call(self.context.sender(), self.contract.address, calldata)
    }

    ///
    /// Submits a state-changing call and blocks until it is confirmed.
    ///
    pub fn transact(&self, function: &str, arguments: &[Token]) -> Result<Receipt> {
        let calldata = self
            .contract
            .interface
            .function(function)?
            .encode_input(arguments)?;

        let transaction_hash = self.context.environment().submit_transaction(
            self.context.sender(),
            self.contract.address,
            calldata.as_slice(),
        )?;
        let receipt = self.context.wait_for_receipt(transaction_hash)?;
        if !receipt.is_successful {
            return Err(Error::TransactionFailed {
                name: function.to_owned(),
                transaction_hash,
            });
        }

        self.context.report_transaction(function, &receipt)?;
        Ok(receipt)
    }
}
