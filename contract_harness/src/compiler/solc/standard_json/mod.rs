//!
//! The `solc --standard-json` I/O.
//!

pub mod input;
pub mod output;
