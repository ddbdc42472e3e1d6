//!
//! The `solc --standard-json` input language.
//!

use serde::Serialize;

///
/// The `solc --standard-json` input language.
///
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// The Solidity language.
    Solidity,
}
