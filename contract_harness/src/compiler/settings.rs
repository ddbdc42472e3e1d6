//!
//! The compiler settings.
//!

use std::path::PathBuf;

///
/// The compiler settings.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The directories sources are allowed to import from.
    pub allow_paths: Vec<PathBuf>,
    /// Whether the optimizer is enabled.
    pub optimize: bool,
    /// The number of optimizer runs.
    pub optimize_runs: u32,
}

impl Settings {
    /// The default number of optimizer runs.
    pub const DEFAULT_OPTIMIZE_RUNS: u32 = 200;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(allow_paths: Vec<PathBuf>, optimize: bool, optimize_runs: u32) -> Self {
        Self {
            allow_paths,
            optimize,
            optimize_runs,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(vec![], true, Self::DEFAULT_OPTIMIZE_RUNS)
    }
}
