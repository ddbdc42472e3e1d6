//!
//! The contract harness utils.
//!

use std::path::Path;

use sha3::Digest;

/// The Ethereum address byte length.
pub const BYTE_LENGTH_ETH_ADDRESS: usize = 20;

/// The field byte length.
pub const BYTE_LENGTH_FIELD: usize = 32;

///
/// Returns the `keccak256` hash of `data`.
///
pub fn keccak256(data: &[u8]) -> [u8; BYTE_LENGTH_FIELD] {
    sha3::Keccak256::digest(data).into()
}

///
/// Overrides the default formatting for `Address`, which replaces the middle with an ellipsis.
///
pub fn address_as_string(value: &web3::types::Address) -> String {
    hex::encode(value.as_bytes())
}

///
/// Normalizes `path` by replacing possible backslashes with ordinary slashes, and returns a string.
///
pub fn path_to_string_normalized(path: &Path) -> String {
    path.to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR_STR, "/")
}
