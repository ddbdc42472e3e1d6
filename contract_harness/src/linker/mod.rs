//!
//! The bytecode linker.
//!

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::artifact::bytecode::Bytecode;
use crate::artifact::bytecode::LinkedBytecode;
use crate::artifact::set::ArtifactSet;
use crate::artifact::Artifact;
use crate::deployer::deployed_contract::DeployedContract;
use crate::error::Error;
use crate::error::Result;
use crate::reporter::Reporter;

///
/// The bytecode linker.
///
/// One linker is one linking session: a library deployed once is reused by every contract
/// linked afterwards.
///
pub struct Linker<'a> {
    /// The compiled artifacts.
    artifacts: &'a ArtifactSet,
    /// The deployed library addresses by identifier.
    deployed: BTreeMap<String, web3::types::Address>,
    /// The chain of contracts being linked, outermost first.
    in_progress: Vec<String>,
    /// The optional reporter of substitutions.
    reporter: Option<&'a dyn Reporter>,
}

impl<'a> Linker<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(artifacts: &'a ArtifactSet) -> Self {
        Self {
            artifacts,
            deployed: BTreeMap::new(),
            in_progress: Vec::new(),
            reporter: None,
        }
    }

    ///
    /// Reports every substituted library to `reporter`.
    ///
    pub fn with_reporter(mut self, reporter: &'a dyn Reporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    ///
    /// Returns the libraries deployed in this session.
    ///
    pub fn libraries(&self) -> &BTreeMap<String, web3::types::Address> {
        &self.deployed
    }

    ///
    /// Deploys the `libraries` of `contract` in order and substitutes their addresses.
    ///
    /// Libraries with placeholders of their own are linked first, so transitive dependencies
    /// are deployed earlier. Deployments go through `deploy` one by one.
    ///
    pub fn link<F>(
        &mut self,
        contract: &str,
        bytecode: &Bytecode,
        libraries: &[String],
        deploy: &mut F,
    ) -> Result<LinkedBytecode>
    where
        F: FnMut(&Artifact, LinkedBytecode) -> Result<DeployedContract>,
    {
        self.in_progress.push(contract.to_owned());
        let result = self.link_inner(contract, bytecode, libraries, deploy);
        self.in_progress.pop();
        result
    }

    ///
    /// Links the bytecode with `contract` already marked as in progress.
    ///
    fn link_inner<F>(
        &mut self,
        contract: &str,
        bytecode: &Bytecode,
        libraries: &[String],
        deploy: &mut F,
    ) -> Result<LinkedBytecode>
    where
        F: FnMut(&Artifact, LinkedBytecode) -> Result<DeployedContract>,
    {
        let artifacts = self.artifacts;

        let mut bytecode = bytecode.to_owned();
        for name in libraries.iter() {
            let library = artifacts.resolve(name)?;
            let identifier = library.identifier.as_str();

            let address = match self.deployed.get(identifier) {
                Some(address) => *address,
                None => self.deploy_library(contract, library, deploy)?,
            };

            bytecode.substitute(identifier, &address);
            if let Some(reporter) = self.reporter {
                reporter.library_linked(contract, identifier, &address);
            }
        }

        self.validate(contract, bytecode)
    }

    ///
    /// Links if needed and deploys the library, returning its address.
    ///
    fn deploy_library<F>(
        &mut self,
        contract: &str,
        library: &Artifact,
        deploy: &mut F,
    ) -> Result<web3::types::Address>
    where
        F: FnMut(&Artifact, LinkedBytecode) -> Result<DeployedContract>,
    {
        let identifier = library.identifier.as_str();
        if let Some(position) = self
            .in_progress
            .iter()
            .position(|linked| linked == identifier)
        {
            let mut cycle = self.in_progress[position..].to_vec();
            cycle.push(identifier.to_owned());
            return Err(Error::LinkResolution {
                contract: contract.to_owned(),
                unresolved: cycle,
            });
        }

        let bytecode = if library.bytecode.has_placeholders() {
            let dependencies = self.artifacts.dependencies(library);
            self.link(identifier, &library.bytecode, dependencies.as_slice(), deploy)?
        } else {
            library.bytecode.clone().into_linked(identifier)?
        };

        let deployed = deploy(library, bytecode)?;
        self.deployed.insert(identifier.to_owned(), deployed.address);
        Ok(deployed.address)
    }

    ///
    /// Fails if any placeholder is left, naming the libraries it refers to.
    ///
    fn validate(&self, contract: &str, bytecode: Bytecode) -> Result<LinkedBytecode> {
        if !bytecode.has_placeholders() {
            return bytecode.into_linked(contract);
        }

        let unresolved = bytecode
            .placeholders()
            .into_iter()
            .map(|placeholder| {
                self.artifacts
                    .identifier_for_placeholder(placeholder.as_str())
                    .map(str::to_owned)
                    .unwrap_or(placeholder)
            })
            .collect();
        Err(Error::LinkResolution {
            contract: contract.to_owned(),
            unresolved,
        })
    }
}
