//!
//! The `solc --standard-json` input.
//!

pub mod language;
pub mod settings;
pub mod source;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::compiler::settings::Settings as CompilerSettings;
use crate::utils;

use self::language::Language;
use self::settings::optimizer::Optimizer;
use self::settings::selection::Selection;
use self::settings::Settings;
use self::source::Source;

///
/// The `solc --standard-json` input.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The input source code files hashmap.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings.
    pub settings: Settings,
}

impl Input {
    ///
    /// A shortcut constructor from source code files.
    ///
    /// The source unit names are the normalized paths, so they become the identifier prefixes.
    ///
    pub fn try_from_paths(paths: &[PathBuf], settings: &CompilerSettings) -> anyhow::Result<Self> {
        let mut sources = BTreeMap::new();
        for path in paths.iter() {
            let content = std::fs::read_to_string(path).map_err(|error| {
                anyhow::anyhow!("Source file {:?} reading error: {}", path, error)
            })?;
            sources.insert(
                utils::path_to_string_normalized(path.as_path()),
                Source::from(content),
            );
        }

        Ok(Self {
            language: Language::Solidity,
            sources,
            settings: Settings::new(
                Optimizer::new(settings.optimize, settings.optimize_runs),
                Selection::new_required(),
            ),
        })
    }
}
