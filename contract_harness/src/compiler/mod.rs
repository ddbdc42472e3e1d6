//!
//! The contract compilers.
//!

pub mod downloader;
pub mod settings;
pub mod solc;

use std::path::PathBuf;

use crate::artifact::set::ArtifactSet;
use crate::error::Result;

use self::settings::Settings;

///
/// The compiler trait.
///
pub trait Compiler {
    ///
    /// Compiles the sources into a fresh artifact set with interfaces and bytecode.
    ///
    fn compile(&self, sources: &[PathBuf], settings: &Settings) -> Result<ArtifactSet>;
}
