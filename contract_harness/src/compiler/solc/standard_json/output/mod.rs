//!
//! The `solc --standard-json` output.
//!

pub mod contract;
pub mod error;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;

use crate::artifact::bytecode::Bytecode;
use crate::artifact::set::ArtifactSet;
use crate::artifact::Artifact;

use self::contract::Contract;
use self::error::Error;

///
/// The `solc --standard-json` output.
///
#[derive(Debug, Deserialize, Clone)]
pub struct Output {
    /// The file-contract hashmap.
    #[serde(default)]
    pub contracts: Option<BTreeMap<String, BTreeMap<String, Contract>>>,
    /// The compilation errors and warnings.
    #[serde(default)]
    pub errors: Option<Vec<Error>>,
}

impl Output {
    ///
    /// Fails if any message has the `error` severity.
    ///
    pub fn check_errors(&self) -> anyhow::Result<()> {
        let messages: Vec<String> = self
            .errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|error| error.is_error())
            .map(|error| error.to_string())
            .collect();
        if !messages.is_empty() {
            anyhow::bail!("`solc` errors found:\n{}", messages.join("\n"));
        }
        Ok(())
    }

    ///
    /// Converts the output into artifacts keyed by `<path>:<name>`.
    ///
    pub fn try_into_artifacts(self) -> anyhow::Result<ArtifactSet> {
        self.check_errors()?;

        let files = self
            .contracts
            .ok_or_else(|| anyhow::anyhow!("Solidity contracts not found in the output"))?;

        let mut artifacts = Vec::with_capacity(files.len());
        for (path, contracts) in files.into_iter() {
            for (name, contract) in contracts.into_iter() {
                let identifier = format!("{path}:{name}");

                let interface: web3::ethabi::Contract =
                    serde_json::from_value(contract.abi.unwrap_or_else(|| serde_json::json!([])))
                        .map_err(|error| {
                            anyhow::anyhow!("ABI of the contract `{identifier}` is invalid: {error}")
                        })?;

                let bytecode = contract
                    .evm
                    .and_then(|evm| evm.bytecode)
                    .ok_or_else(|| {
                        anyhow::anyhow!("EVM bytecode of the contract `{identifier}` not found")
                    })?;

                let libraries: BTreeSet<String> = bytecode
                    .link_references
                    .iter()
                    .flat_map(|(file, libraries)| {
                        libraries
                            .keys()
                            .map(move |library| format!("{file}:{library}"))
                    })
                    .collect();

                artifacts.push(Artifact::new(
                    identifier,
                    interface,
                    Bytecode::new(bytecode.object),
                    libraries,
                ));
            }
        }

        Ok(artifacts.into_iter().collect())
    }
}
