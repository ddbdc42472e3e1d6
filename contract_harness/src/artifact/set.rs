//!
//! The compiled artifact set.
//!

use std::collections::BTreeMap;

use crate::error::Error;
use crate::error::Result;

use super::placeholder;
use super::Artifact;

///
/// The compiled artifact set, keyed by compilation unit identifiers.
///
/// Produced once per compilation and never modified afterwards.
///
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    /// The artifacts sorted by identifier.
    artifacts: BTreeMap<String, Artifact>,
}

impl ArtifactSet {
    ///
    /// Returns the number of artifacts.
    ///
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    ///
    /// Whether the set is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    ///
    /// Returns the artifact with exactly the `identifier`.
    ///
    pub fn get(&self, identifier: &str) -> Option<&Artifact> {
        self.artifacts.get(identifier)
    }

    ///
    /// Iterates over the artifacts in identifier order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    ///
    /// Resolves the artifact whose identifier ends with `name`.
    ///
    /// An exact identifier always wins. If several identifiers end with `name`, the only one
    /// where the match starts at an identifier boundary wins. Otherwise the name is ambiguous.
    ///
    pub fn resolve(&self, name: &str) -> Result<&Artifact> {
        if name.is_empty() {
            return Err(Error::NotFound {
                name: name.to_owned(),
            });
        }
        if let Some(artifact) = self.artifacts.get(name) {
            return Ok(artifact);
        }

        let candidates: Vec<&String> = self
            .artifacts
            .keys()
            .filter(|identifier| identifier.ends_with(name))
            .collect();

        let identifier = match candidates.as_slice() {
            [] => {
                return Err(Error::NotFound {
                    name: name.to_owned(),
                })
            }
            [identifier] => *identifier,
            _ => {
                let bounded: Vec<&String> = candidates
                    .iter()
                    .copied()
                    .filter(|identifier| Self::is_bounded_match(identifier, name))
                    .collect();
                match bounded.as_slice() {
                    [identifier] => *identifier,
                    [] => return Err(Self::ambiguous(name, candidates)),
                    _ => return Err(Self::ambiguous(name, bounded)),
                }
            }
        };

        Ok(&self.artifacts[identifier])
    }

    ///
    /// Returns the identifier of the artifact the `placeholder` refers to.
    ///
    pub fn identifier_for_placeholder(&self, placeholder: &str) -> Option<&str> {
        self.artifacts
            .keys()
            .find(|identifier| placeholder::matches(placeholder, identifier))
            .map(String::as_str)
    }

    ///
    /// Returns the library identifiers the artifact depends on.
    ///
    /// The declared link references come first, followed by the identifiers recovered from
    /// undeclared placeholders.
    ///
    pub fn dependencies(&self, artifact: &Artifact) -> Vec<String> {
        let mut dependencies: Vec<String> = artifact.libraries.iter().cloned().collect();
        for placeholder in artifact.bytecode.placeholders().iter() {
            if let Some(identifier) = self.identifier_for_placeholder(placeholder) {
                if !dependencies.iter().any(|known| known == identifier) {
                    dependencies.push(identifier.to_owned());
                }
            }
        }
        dependencies
    }

    ///
    /// Whether the `name` suffix starts at the beginning of the identifier or after a separator.
    ///
    fn is_bounded_match(identifier: &str, name: &str) -> bool {
        let prefix = &identifier[..identifier.len() - name.len()];
        prefix.is_empty() || prefix.ends_with(':') || prefix.ends_with('/')
    }

    ///
    /// Creates the ambiguity error.
    ///
    fn ambiguous(name: &str, candidates: Vec<&String>) -> Error {
        Error::AmbiguousName {
            name: name.to_owned(),
            candidates: candidates.into_iter().cloned().collect(),
        }
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<T: IntoIterator<Item = Artifact>>(iter: T) -> Self {
        Self {
            artifacts: iter
                .into_iter()
                .map(|artifact| (artifact.identifier.clone(), artifact))
                .collect(),
        }
    }
}
