//!
//! The Solidity compiler JSON list metadata.
//!

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Deserialize;

///
/// The Solidity compiler JSON list metadata.
///
#[derive(Debug, Deserialize)]
pub struct SolcList {
    /// The compiler releases, by version.
    pub releases: BTreeMap<String, String>,
}

impl SolcList {
    /// The list file name in a platform directory.
    pub const FILE_NAME: &'static str = "list.json";

    ///
    /// Downloads the list from the platform directory `url`.
    ///
    pub fn download(
        http_client: &reqwest::blocking::Client,
        url: &reqwest::Url,
    ) -> anyhow::Result<Self> {
        let url = url.join(Self::FILE_NAME)?;
        println!(
            " {} solc-bin JSON `{}`",
            "Downloading".bright_green().bold(),
            url
        );
        let list: SolcList = http_client.get(url).send()?.error_for_status()?.json()?;
        Ok(list)
    }

    ///
    /// Returns the binary file name of the `version`.
    ///
    pub fn binary_name(&self, version: &semver::Version) -> anyhow::Result<&str> {
        self.releases
            .get(version.to_string().as_str())
            .map(String::as_str)
            .ok_or_else(|| {
                anyhow::anyhow!("Binary for version v{version} not found in the solc JSON list")
            })
    }
}
