//!
//! The library address placeholder.
//!

use crate::utils;

/// The placeholder length in hexadecimal characters, equal to an encoded address.
pub const LENGTH: usize = utils::BYTE_LENGTH_ETH_ADDRESS * 2;

/// The placeholder start marker. Never valid hexadecimal.
pub const MARKER: &str = "__";

/// The number of hash characters in the hashed placeholder.
const HASH_PREFIX_LENGTH: usize = 34;

/// The number of identifier characters kept in the legacy placeholder.
const LEGACY_IDENTIFIER_LENGTH: usize = 36;

///
/// Returns the hashed placeholder `__$<keccak256(identifier)[..34]>$__`.
///
pub fn hashed(identifier: &str) -> String {
    let hash = hex::encode(utils::keccak256(identifier.as_bytes()));
    format!("__${}$__", &hash[..HASH_PREFIX_LENGTH])
}

///
/// Returns the legacy placeholder, where the identifier is truncated and padded with underscores.
///
pub fn legacy(identifier: &str) -> String {
    let truncated: String = identifier.chars().take(LEGACY_IDENTIFIER_LENGTH).collect();
    format!("{MARKER}{truncated:_<width$}", width = LENGTH - MARKER.len())
}

///
/// Whether `placeholder` refers to `identifier` in either format.
///
pub fn matches(placeholder: &str, identifier: &str) -> bool {
    placeholder == hashed(identifier) || placeholder == legacy(identifier)
}
