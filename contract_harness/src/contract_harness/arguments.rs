//!
//! The contract harness arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The contract harness arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The name of the contract under test.
    pub contract: String,

    /// The configuration file path.
    #[arg(short, long, default_value = "./configs/harness.json")]
    pub config: PathBuf,

    /// The source files to compile.
    /// Defaults to `<contractsDirectory>/<contract>.sol`.
    #[arg(short, long)]
    pub source: Vec<PathBuf>,

    /// The read-only functions without arguments to call after deployment.
    #[arg(long)]
    pub call: Vec<String>,

    /// The raw calldata output file, overriding the configuration.
    #[arg(long)]
    pub calldata_output: Option<PathBuf>,

    /// Prints the resolver and linker decisions.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("`verbose` and `quiet` cannot be used together");
        }
        if arguments.contract.is_empty() {
            anyhow::bail!("The contract name cannot be empty");
        }
        Ok(arguments)
    }
}
