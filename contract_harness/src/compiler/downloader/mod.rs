//!
//! The compiler downloader.
//!

pub mod solc_list;

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;

use crate::compiler::solc::SolcCompiler;

use self::solc_list::SolcList;

///
/// The compiler downloader.
///
#[derive(Debug)]
pub struct Downloader {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The solc-bin base URL.
    base_url: reqwest::Url,
}

impl Downloader {
    /// The default solc-bin base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://binaries.soliditylang.org/";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(http_client: reqwest::blocking::Client) -> Self {
        Self {
            http_client,
            base_url: reqwest::Url::from_str(Self::DEFAULT_BASE_URL).expect("Always valid"),
        }
    }

    ///
    /// Sets a custom solc-bin mirror.
    ///
    pub fn with_base_url(mut self, base_url: reqwest::Url) -> Self {
        self.base_url = base_url;
        self
    }

    ///
    /// Downloads the `solc` binary of `version` into `directory` unless it is already there.
    ///
    /// Returns the path to the executable.
    ///
    pub fn download(&self, version: &semver::Version, directory: &Path) -> anyhow::Result<PathBuf> {
        let destination_path = directory.join(SolcCompiler::executable_name(version));
        if destination_path.exists() {
            return Ok(destination_path);
        }

        let platform_url = self
            .base_url
            .join(format!("{}/", Self::platform_directory()?).as_str())?;
        let solc_list = SolcList::download(&self.http_client, &platform_url)?;
        let source_url = platform_url.join(solc_list.binary_name(version)?)?;

        println!(
            " {} binary `{}` => {:?}",
            "Downloading".bright_green().bold(),
            source_url,
            destination_path,
        );
        let data = self
            .http_client
            .get(source_url)
            .send()?
            .error_for_status()?
            .bytes()?;

        std::fs::create_dir_all(directory).map_err(|error| {
            anyhow::anyhow!("Compiler directory {:?} creating error: {}", directory, error)
        })?;
        std::fs::write(&destination_path, data)?;
        std::fs::set_permissions(&destination_path, std::fs::Permissions::from_mode(0o755))?;

        Ok(destination_path)
    }

    ///
    /// Returns the solc-bin platform directory of the host.
    ///
    pub fn platform_directory() -> anyhow::Result<&'static str> {
        if cfg!(target_os = "linux") && cfg!(target_arch = "x86_64") {
            Ok("linux-amd64")
        } else if cfg!(target_os = "macos") {
            Ok("macosx-amd64")
        } else {
            anyhow::bail!("This platform is not supported by solc-bin")
        }
    }
}
