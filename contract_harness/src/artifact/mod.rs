//!
//! The compiled contract artifact.
//!

pub mod bytecode;
pub mod placeholder;
pub mod set;

use std::collections::BTreeSet;

use self::bytecode::Bytecode;

///
/// The compiled contract artifact.
///
#[derive(Debug, Clone)]
pub struct Artifact {
    /// The compilation unit identifier, `<path>:<name>`.
    pub identifier: String,
    /// The contract interface.
    pub interface: web3::ethabi::Contract,
    /// The deploy bytecode.
    pub bytecode: Bytecode,
    /// The identifiers of the libraries declared in the link references.
    pub libraries: BTreeSet<String>,
}

impl Artifact {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        identifier: String,
        interface: web3::ethabi::Contract,
        bytecode: Bytecode,
        libraries: BTreeSet<String>,
    ) -> Self {
        Self {
            identifier,
            interface,
            bytecode,
            libraries,
        }
    }

    ///
    /// Returns the contract name without the source path.
    ///
    pub fn name(&self) -> &str {
        match self.identifier.rsplit_once(':') {
            Some((_path, name)) => name,
            None => self.identifier.as_str(),
        }
    }
}
