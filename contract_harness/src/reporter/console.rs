//!
//! The console reporter.
//!

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use crate::error::Error;
use crate::error::Result;
use crate::reporter::Reporter;
use crate::reporter::TransactionReport;
use crate::utils;

///
/// The reporter printing to the standard output.
///
#[derive(Debug)]
pub struct ConsoleReporter {
    /// Whether to print the resolver and linker decisions.
    verbose: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The raw calldata output file.
    calldata_output: Option<PathBuf>,
}

impl ConsoleReporter {
    ///
    /// A shortcut constructor.
    ///
    /// The calldata output file is truncated, so it only contains the current run.
    ///
    pub fn new(verbose: bool, quiet: bool, calldata_output: Option<PathBuf>) -> Result<Self> {
        if let Some(ref path) = calldata_output {
            std::fs::File::create(path).map_err(|error| Error::Io {
                path: path.to_owned(),
                error,
            })?;
        }
        Ok(Self {
            verbose,
            quiet,
            calldata_output,
        })
    }

    ///
    /// Appends the calldata line to the output file.
    ///
    fn write_calldata(&self, name: &str, calldata: &[u8]) -> Result<()> {
        let path = match self.calldata_output {
            Some(ref path) => path,
            None => return Ok(()),
        };

        std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{name}: 0x{}", hex::encode(calldata)))
            .map_err(|error| Error::Io {
                path: path.to_owned(),
                error,
            })
    }
}

impl Reporter for ConsoleReporter {
    fn requires_calldata(&self) -> bool {
        self.calldata_output.is_some()
    }

    fn transaction(&self, report: &TransactionReport) -> Result<()> {
        if let Some(calldata) = report.calldata {
            self.write_calldata(report.name, calldata)?;
        }
        if self.quiet {
            return Ok(());
        }

        println!(
            "   {} `{}` in 0x{}",
            "Confirmed".bright_green().bold(),
            report.name,
            hex::encode(report.receipt.transaction_hash.as_bytes()),
        );
        println!("             gasUsed = {}", report.receipt.gas_used);
        if let Some(ref address) = report.receipt.contract_address {
            println!(
                "             contractAddress = 0x{}",
                utils::address_as_string(address)
            );
        }
        Ok(())
    }

    fn bytecode_size(&self, name: &str, size: usize, is_library: bool) {
        if self.quiet {
            return;
        }
        if is_library {
            println!("             Lib {name} bytecode size: {size}");
        } else {
            println!("             Bytecode size: {size}");
        }
    }

    fn artifact_resolved(&self, name: &str, identifier: &str) {
        if !self.verbose || self.quiet {
            return;
        }
        println!(
            "    {} `{name}` => `{identifier}`",
            "Resolved".bright_white().bold()
        );
    }

    fn library_linked(&self, contract: &str, library: &str, address: &web3::types::Address) {
        if !self.verbose || self.quiet {
            return;
        }
        println!(
            "      {} `{library}` into `{contract}` at 0x{}",
            "Linked".bright_white().bold(),
            utils::address_as_string(address),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::environment::receipt::Receipt;
    use crate::reporter::Reporter;
    use crate::reporter::TransactionReport;

    use super::ConsoleReporter;

    #[test]
    fn calldata_written() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join("tx_calldata.txt");
        std::fs::write(&path, "stale\n").expect("Always valid");

        let reporter = ConsoleReporter::new(false, true, Some(path.clone())).expect("Always valid");
        assert!(reporter.requires_calldata());

        let receipt = Receipt::new(
            web3::types::H256::from_low_u64_be(1),
            None,
            web3::types::U256::from(21_000),
            true,
        );
        for (name, calldata) in [
            ("Math", vec![0x60, 0x80]),
            ("test", vec![0xf8, 0xa8, 0xfd, 0x6d]),
        ] {
            reporter
                .transaction(&TransactionReport {
                    name,
                    receipt: &receipt,
                    calldata: Some(calldata.as_slice()),
                })
                .expect("Always valid");
        }

        assert_eq!(
            std::fs::read_to_string(&path).expect("Always valid"),
            "Math: 0x6080\ntest: 0xf8a8fd6d\n"
        );
    }

    #[test]
    fn calldata_not_required() {
        let reporter = ConsoleReporter::new(true, false, None).expect("Always valid");
        assert!(!reporter.requires_calldata());
    }
}
