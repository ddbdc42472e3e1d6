//!
//! The `solc --standard-json` input settings.
//!

pub mod optimizer;
pub mod selection;

use serde::Serialize;

use self::optimizer::Optimizer;
use self::selection::Selection;

///
/// The `solc --standard-json` input settings.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The optimizer settings.
    pub optimizer: Optimizer,
    /// The output selection filters.
    pub output_selection: Selection,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(optimizer: Optimizer, output_selection: Selection) -> Self {
        Self {
            optimizer,
            output_selection,
        }
    }
}
