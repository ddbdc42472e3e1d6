//!
//! The `solc --standard-json` output contract.
//!

use std::collections::BTreeMap;

use serde::Deserialize;

///
/// The `solc --standard-json` output contract.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The contract ABI.
    #[serde(default)]
    pub abi: Option<serde_json::Value>,
    /// The contract EVM data.
    #[serde(default)]
    pub evm: Option<EVM>,
}

///
/// The `solc --standard-json` output contract EVM data.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::upper_case_acronyms)]
pub struct EVM {
    /// The contract deploy bytecode.
    #[serde(default)]
    pub bytecode: Option<Bytecode>,
}

///
/// The `solc --standard-json` output contract EVM bytecode.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Bytecode {
    /// The bytecode object.
    pub object: String,
    /// The library link references, by source file and library name.
    #[serde(default)]
    pub link_references: BTreeMap<String, BTreeMap<String, Vec<LinkReference>>>,
}

///
/// The library placeholder position in the bytecode.
///
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LinkReference {
    /// The byte offset.
    pub start: usize,
    /// The byte length.
    pub length: usize,
}
