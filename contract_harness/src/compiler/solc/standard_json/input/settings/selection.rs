//!
//! The `solc --standard-json` output selection.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;

///
/// The `solc --standard-json` expected output selection flag.
///
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Flag {
    /// The contract ABI.
    #[serde(rename = "abi")]
    ABI,
    /// The deploy bytecode object.
    #[serde(rename = "evm.bytecode.object")]
    BytecodeObject,
    /// The deploy bytecode library link references.
    #[serde(rename = "evm.bytecode.linkReferences")]
    BytecodeLinkReferences,
}

///
/// The `solc --standard-json` output selection.
///
/// Maps file patterns to contract patterns to the selected flags.
///
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, BTreeMap<String, BTreeSet<Flag>>>);

impl Selection {
    /// The all-files and all-contracts wildcard.
    const WILDCARD: &'static str = "*";

    ///
    /// Creates the selection required for linking and deployment.
    ///
    pub fn new_required() -> Self {
        let flags = BTreeSet::from([Flag::ABI, Flag::BytecodeObject, Flag::BytecodeLinkReferences]);
        let contracts = BTreeMap::from([(Self::WILDCARD.to_owned(), flags)]);
        Self(BTreeMap::from([(Self::WILDCARD.to_owned(), contracts)]))
    }
}
