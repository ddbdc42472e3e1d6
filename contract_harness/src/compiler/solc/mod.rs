//!
//! The Solidity compiler.
//!

pub mod standard_json;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::artifact::set::ArtifactSet;
use crate::compiler::settings::Settings;
use crate::compiler::Compiler;
use crate::error::Error;
use crate::error::Result;

use self::standard_json::input::Input as StandardJsonInput;
use self::standard_json::output::Output as StandardJsonOutput;

///
/// The Solidity compiler.
///
#[derive(Debug, Clone)]
pub struct SolcCompiler {
    /// The executable path.
    pub executable: PathBuf,
}

impl SolcCompiler {
    /// The executable name prefix in the compiler directory.
    pub const EXECUTABLE_PREFIX: &'static str = "solc-";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf) -> anyhow::Result<Self> {
        if let Err(error) = which::which(executable.as_path()) {
            anyhow::bail!(
                "The `{}` executable not found in ${{PATH}}: {}",
                executable.to_string_lossy(),
                error
            );
        }
        Ok(Self { executable })
    }

    ///
    /// A shortcut constructor for the `solc-<version>` executable in `directory`.
    ///
    pub fn from_directory(directory: &Path, version: &semver::Version) -> anyhow::Result<Self> {
        Self::new(directory.join(Self::executable_name(version)))
    }

    ///
    /// Returns the executable name of the `version`.
    ///
    pub fn executable_name(version: &semver::Version) -> String {
        format!("{}{version}", Self::EXECUTABLE_PREFIX)
    }

    ///
    /// Runs the `--standard-json` compilation.
    ///
    pub fn standard_json(
        &self,
        input: StandardJsonInput,
        allow_paths: &[PathBuf],
    ) -> anyhow::Result<StandardJsonOutput> {
        let executable = self.executable.to_string_lossy();

        let mut command = std::process::Command::new(self.executable.as_path());
        command.stdin(std::process::Stdio::piped());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        command.arg("--standard-json");
        if !allow_paths.is_empty() {
            command.arg("--allow-paths");
            command.arg(
                allow_paths
                    .iter()
                    .map(|path| path.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        let input_json = serde_json::to_vec(&input).expect("Always valid");

        let process = command.spawn().map_err(|error| {
            anyhow::anyhow!("{executable} subprocess spawning error: {error:?}")
        })?;
        process
            .stdin
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("{executable} stdin getting error"))?
            .write_all(input_json.as_slice())
            .map_err(|error| anyhow::anyhow!("{executable} stdin writing error: {error:?}"))?;

        let output = process.wait_with_output().map_err(|error| {
            anyhow::anyhow!("{executable} subprocess output error: {error:?}")
        })?;
        if !output.status.success() {
            anyhow::bail!(
                "{executable} error: {}",
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        let output: StandardJsonOutput = serde_json::from_slice(output.stdout.as_slice())
            .map_err(|error| {
                anyhow::anyhow!(
                    "{executable} subprocess output parsing error: {error}\n{}",
                    String::from_utf8_lossy(output.stdout.as_slice()),
                )
            })?;

        Ok(output)
    }
}

impl Compiler for SolcCompiler {
    fn compile(&self, sources: &[PathBuf], settings: &Settings) -> Result<ArtifactSet> {
        let input = StandardJsonInput::try_from_paths(sources, settings)
            .map_err(|error| Error::Compilation {
                message: format!("{error:#}"),
            })?;
        self.standard_json(input, settings.allow_paths.as_slice())
            .and_then(StandardJsonOutput::try_into_artifacts)
            .map_err(|error| Error::Compilation {
                message: format!("{error:#}"),
            })
    }
}
