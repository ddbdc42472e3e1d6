//!
//! The contract deployer.
//!

pub mod deployed_contract;

use web3::ethabi::Token;

use crate::artifact::bytecode::LinkedBytecode;
use crate::artifact::Artifact;
use crate::context::Context;
use crate::environment::Environment;
use crate::error::Error;
use crate::error::Result;

use self::deployed_contract::DeployedContract;

///
/// The contract deployer.
///
/// Every call submits a new construction transaction, so deploying the same bytecode twice
/// yields two contracts.
///
pub struct Deployer<'ctx, E>
where
    E: Environment,
{
    /// The run context.
    context: &'ctx Context<E>,
}

impl<'ctx, E> Deployer<'ctx, E>
where
    E: Environment,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(context: &'ctx Context<E>) -> Self {
        Self { context }
    }

    ///
    /// Deploys the fully linked artifact.
    ///
    pub fn deploy(&self, artifact: &Artifact) -> Result<DeployedContract> {
        self.deploy_with_arguments(artifact, &[])
    }

    ///
    /// Deploys the fully linked artifact with constructor arguments.
    ///
    /// Fails with `LinkResolution` before submitting anything if placeholders are left.
    ///
    pub fn deploy_with_arguments(
        &self,
        artifact: &Artifact,
        arguments: &[Token],
    ) -> Result<DeployedContract> {
        let bytecode = artifact.bytecode.clone().into_linked(artifact.name())?;
        self.deploy_linked_with_arguments(
            artifact.name(),
            &artifact.interface,
            bytecode,
            arguments,
        )
    }

    ///
    /// Deploys the linked bytecode.
    ///
    pub fn deploy_linked(
        &self,
        name: &str,
        interface: &web3::ethabi::Contract,
        bytecode: LinkedBytecode,
    ) -> Result<DeployedContract> {
        self.deploy_linked_with_arguments(name, interface, bytecode, &[])
    }

    ///
    /// Deploys the linked bytecode with constructor arguments.
    ///
    pub fn deploy_linked_with_arguments(
        &self,
        name: &str,
        interface: &web3::ethabi::Contract,
        bytecode: LinkedBytecode,
        arguments: &[Token],
    ) -> Result<DeployedContract> {
        let code = match interface.constructor() {
            Some(constructor) => constructor.encode_input(bytecode.into_inner(), arguments)?,
            None if arguments.is_empty() => bytecode.into_inner(),
            None => {
                return Err(Error::Deployment {
                    name: name.to_owned(),
                    diagnostic: format!(
                        "the contract has no constructor, but {} arguments were given",
                        arguments.len()
                    ),
                })
            }
        };

        let transaction_hash = self
            .context
            .environment()
            .submit_construction(self.context.sender(), code.as_slice())
            .map_err(|error| match error {
                Error::Rpc { code, message, .. } => Error::Deployment {
                    name: name.to_owned(),
                    diagnostic: format!("{message} (code {code})"),
                },
                error => error,
            })?;

        let receipt = self.context.wait_for_receipt(transaction_hash)?;
        if !receipt.is_successful {
            return Err(Error::Deployment {
                name: name.to_owned(),
                diagnostic: format!("constructor reverted in {transaction_hash:?}"),
            });
        }
        let address = receipt.contract_address.ok_or_else(|| Error::Deployment {
            name: name.to_owned(),
            diagnostic: format!("no contract address in the receipt of {transaction_hash:?}"),
        })?;

        self.context.report_transaction(name, &receipt)?;

        Ok(DeployedContract::new(
            name.to_owned(),
            address,
            interface.to_owned(),
            receipt,
        ))
    }
}
