//!
//! The transaction confirmation settings.
//!

use std::time::Duration;

///
/// The transaction confirmation settings.
///
/// Configured once at startup and shared by every blocking wait of a run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// The receipt polling interval.
    pub poll_interval: Duration,
    /// The maximum time to wait for a receipt.
    pub timeout: Duration,
}

impl Confirmation {
    /// The default receipt polling interval.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

    /// The default confirmation timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            poll_interval,
            timeout,
        }
    }
}

impl Default for Confirmation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POLL_INTERVAL, Self::DEFAULT_TIMEOUT)
    }
}
