//!
//! The run context.
//!

use crate::environment::confirmation::Confirmation;
use crate::environment::receipt::Receipt;
use crate::environment::Environment;
use crate::error::Error;
use crate::error::Result;
use crate::reporter::Reporter;
use crate::reporter::TransactionReport;

///
/// The run context shared by every component.
///
/// Holds the connection, the default sender and the reporting side channel for the whole run.
///
pub struct Context<E>
where
    E: Environment,
{
    /// The execution environment.
    environment: E,
    /// The default sender of every transaction.
    sender: web3::types::Address,
    /// The confirmation settings.
    confirmation: Confirmation,
    /// The reporter.
    reporter: Box<dyn Reporter>,
}

impl<E> Context<E>
where
    E: Environment,
{
    ///
    /// A shortcut constructor.
    ///
    /// The first account of the environment becomes the default sender.
    ///
    pub fn new(
        environment: E,
        confirmation: Confirmation,
        reporter: Box<dyn Reporter>,
    ) -> Result<Self> {
        let sender = environment
            .accounts()?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Connection {
                endpoint: environment.endpoint().to_owned(),
                diagnostic: "no accounts available".to_owned(),
            })?;
        Ok(Self::with_sender(environment, sender, confirmation, reporter))
    }

    ///
    /// A shortcut constructor with an explicit sender.
    ///
    pub fn with_sender(
        environment: E,
        sender: web3::types::Address,
        confirmation: Confirmation,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            environment,
            sender,
            confirmation,
            reporter,
        }
    }

    ///
    /// Returns the execution environment.
    ///
    pub fn environment(&self) -> &E {
        &self.environment
    }

    ///
    /// Returns the default sender.
    ///
    pub fn sender(&self) -> web3::types::Address {
        self.sender
    }

    ///
    /// Returns the confirmation settings.
    ///
    pub fn confirmation(&self) -> &Confirmation {
        &self.confirmation
    }

    ///
    /// Returns the reporter.
    ///
    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    ///
    /// Blocks until the transaction is confirmed.
    ///
    pub fn wait_for_receipt(&self, transaction_hash: web3::types::H256) -> Result<Receipt> {
        self.environment.wait_for_receipt(transaction_hash, &self.confirmation)
    }

    ///
    /// Reports the confirmed transaction, fetching its calldata if the reporter requires it.
    ///
    pub fn report_transaction(&self, name: &str, receipt: &Receipt) -> Result<()> {
        let calldata = if self.reporter.requires_calldata() {
            Some(
                self.environment
                    .transaction_input(receipt.transaction_hash)?,
            )
        } else {
            None
        };
        self.reporter.transaction(&TransactionReport {
            name,
            receipt,
            calldata: calldata.as_deref(),
        })
    }
}
