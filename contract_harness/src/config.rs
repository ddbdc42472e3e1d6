//!
//! The contract harness configuration.
//!

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::compiler::settings::Settings as CompilerSettings;
use crate::environment::confirmation::Confirmation;

///
/// The contract harness configuration, loaded once at startup.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The JSON-RPC endpoint URL.
    pub endpoint_address: String,
    /// The `solc` version to compile with.
    pub compiler_version: semver::Version,
    /// The HTTP request timeout in seconds.
    #[serde(default = "Config::default_request_timeout")]
    pub request_timeout: u64,
    /// The confirmation wait timeout in seconds.
    #[serde(default = "Config::default_confirmation_timeout")]
    pub confirmation_timeout: u64,
    /// The receipt polling interval in milliseconds.
    #[serde(default = "Config::default_poll_interval")]
    pub poll_interval: u64,
    /// Whether to enable the optimizer.
    #[serde(default = "Config::default_optimize")]
    pub optimize: bool,
    /// The optimizer runs.
    #[serde(default = "Config::default_optimize_runs")]
    pub optimize_runs: u32,
    /// The contract sources directory.
    #[serde(default = "Config::default_contracts_directory")]
    pub contracts_directory: PathBuf,
    /// The compiler import allow-list. Defaults to the contract sources directory.
    #[serde(default)]
    pub allow_paths: Option<Vec<PathBuf>>,
    /// The `solc` executables directory.
    #[serde(default = "Config::default_compiler_directory")]
    pub compiler_directory: PathBuf,
    /// The raw calldata output file.
    #[serde(default)]
    pub calldata_output: Option<PathBuf>,
}

impl Config {
    ///
    /// Returns the confirmation settings.
    ///
    pub fn confirmation(&self) -> Confirmation {
        Confirmation::new(
            Duration::from_millis(self.poll_interval),
            Duration::from_secs(self.confirmation_timeout),
        )
    }

    ///
    /// Returns the HTTP request timeout.
    ///
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    ///
    /// Returns the compiler import allow-list.
    ///
    pub fn allow_paths(&self) -> Vec<PathBuf> {
        self.allow_paths
            .clone()
            .unwrap_or_else(|| vec![self.contracts_directory.clone()])
    }

    ///
    /// Returns the compiler settings.
    ///
    pub fn compiler_settings(&self) -> CompilerSettings {
        CompilerSettings::new(self.allow_paths(), self.optimize, self.optimize_runs)
    }

    ///
    /// Returns the default source path of `contract`.
    ///
    pub fn default_source(&self, contract: &str) -> PathBuf {
        self.contracts_directory.join(format!("{contract}.sol"))
    }

    fn default_request_timeout() -> u64 {
        600
    }

    fn default_confirmation_timeout() -> u64 {
        Confirmation::DEFAULT_TIMEOUT.as_secs()
    }

    fn default_poll_interval() -> u64 {
        Confirmation::DEFAULT_POLL_INTERVAL.as_millis() as u64
    }

    fn default_optimize() -> bool {
        true
    }

    fn default_optimize_runs() -> u32 {
        CompilerSettings::DEFAULT_OPTIMIZE_RUNS
    }

    fn default_contracts_directory() -> PathBuf {
        PathBuf::from("contracts")
    }

    fn default_compiler_directory() -> PathBuf {
        PathBuf::from("solc-bin")
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path)
            .map_err(|error| anyhow::anyhow!("Config {:?} opening error: {}", path, error))?;
        let reader = std::io::BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(|error| anyhow::anyhow!("Config {:?} parsing error: {}", path, error))?;
        Ok(config)
    }
}
