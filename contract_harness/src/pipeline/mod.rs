//!
//! The compile-and-deploy pipeline.
//!

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use web3::ethabi::Token;

use crate::artifact::bytecode::LinkedBytecode;
use crate::artifact::set::ArtifactSet;
use crate::artifact::Artifact;
use crate::compiler::settings::Settings as CompilerSettings;
use crate::compiler::Compiler;
use crate::context::Context;
use crate::deployer::deployed_contract::DeployedContract;
use crate::deployer::Deployer;
use crate::environment::Environment;
use crate::error::Result;
use crate::instance::Instance;
use crate::linker::Linker;

///
/// The compile-and-deploy pipeline.
///
/// Every step is sequential and the first failure aborts the whole pipeline.
///
pub struct Pipeline<'ctx, C, E>
where
    C: Compiler,
    E: Environment,
{
    /// The contract compiler.
    compiler: C,
    /// The run context.
    context: &'ctx Context<E>,
    /// The compiler settings.
    settings: CompilerSettings,
}

impl<'ctx, C, E> Pipeline<'ctx, C, E>
where
    C: Compiler,
    E: Environment,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(compiler: C, context: &'ctx Context<E>, settings: CompilerSettings) -> Self {
        Self {
            compiler,
            context,
            settings,
        }
    }

    ///
    /// Compiles the sources, links and deploys the `name` contract, and returns its handle.
    ///
    pub fn compile_and_deploy(&self, sources: &[PathBuf], name: &str) -> Result<Instance<'ctx, E>> {
        self.compile_and_deploy_with_arguments(sources, name, &[])
    }

    ///
    /// Same as `compile_and_deploy`, with constructor arguments.
    ///
    pub fn compile_and_deploy_with_arguments(
        &self,
        sources: &[PathBuf],
        name: &str,
        arguments: &[Token],
    ) -> Result<Instance<'ctx, E>> {
        let artifacts = self.compiler.compile(sources, &self.settings)?;
        let artifact = artifacts.resolve(name)?;
        self.context
            .reporter()
            .artifact_resolved(name, artifact.identifier.as_str());

        let contract = self.deploy_artifact(&artifacts, artifact, arguments)?;
        Ok(Instance::new(contract, self.context))
    }

    ///
    /// Links the artifact if it has placeholders and deploys it.
    ///
    pub fn deploy_artifact(
        &self,
        artifacts: &ArtifactSet,
        artifact: &Artifact,
        arguments: &[Token],
    ) -> Result<DeployedContract> {
        let deployer = Deployer::new(self.context);
        let reporter = self.context.reporter();

        let bytecode = if artifact.bytecode.has_placeholders() {
            let libraries = artifacts.dependencies(artifact);
            let mut deploy = |library: &Artifact, bytecode: LinkedBytecode| {
                reporter.bytecode_size(library.name(), bytecode.len(), true);
                deployer.deploy_linked(library.name(), &library.interface, bytecode)
            };
            let bytecode = Linker::new(artifacts).with_reporter(reporter).link(
                artifact.identifier.as_str(),
                &artifact.bytecode,
                libraries.as_slice(),
                &mut deploy,
            )?;
            reporter.bytecode_size(artifact.name(), bytecode.len(), false);
            bytecode
        } else {
            artifact.bytecode.clone().into_linked(artifact.name())?
        };

        deployer.deploy_linked_with_arguments(
            artifact.name(),
            &artifact.interface,
            bytecode,
            arguments,
        )
    }
}
