//!
//! The contract bytecode.
//!

use crate::error::Error;
use crate::error::Result;
use crate::utils;

use super::placeholder;

///
/// The hexadecimal contract bytecode, possibly containing unresolved library placeholders.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bytecode {
    /// The hexadecimal object without the `0x` prefix.
    object: String,
}

impl Bytecode {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(object: impl Into<String>) -> Self {
        let object = object.into();
        let object = match object.strip_prefix("0x") {
            Some(stripped) => stripped.to_owned(),
            None => object,
        };
        Self { object }
    }

    ///
    /// Returns the hexadecimal object.
    ///
    pub fn as_str(&self) -> &str {
        self.object.as_str()
    }

    ///
    /// Returns the length in hexadecimal characters.
    ///
    pub fn len(&self) -> usize {
        self.object.len()
    }

    ///
    /// Whether the bytecode is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    ///
    /// Whether any library placeholder is left.
    ///
    pub fn has_placeholders(&self) -> bool {
        self.object.contains(placeholder::MARKER)
    }

    ///
    /// Returns the distinct placeholders in the order of their first occurrence.
    ///
    /// A truncated placeholder at the end of the object is returned as is.
    ///
    pub fn placeholders(&self) -> Vec<String> {
        let mut placeholders: Vec<String> = Vec::new();
        let mut offset = 0;
        while let Some(position) = self.object[offset..].find(placeholder::MARKER) {
            let start = offset + position;
            let mut end = (start + placeholder::LENGTH).min(self.object.len());
            while !self.object.is_char_boundary(end) {
                end += 1;
            }
            let found = &self.object[start..end];
            if !placeholders.iter().any(|known| known == found) {
                placeholders.push(found.to_owned());
            }
            offset = end;
        }
        placeholders
    }

    ///
    /// Replaces every placeholder of `identifier` with `address` in place.
    ///
    /// Returns the number of substituted occurrences.
    ///
    pub fn substitute(&mut self, identifier: &str, address: &web3::types::Address) -> usize {
        let address = utils::address_as_string(address);
        let mut count = 0;
        for placeholder in [
            placeholder::hashed(identifier),
            placeholder::legacy(identifier),
        ] {
            count += self.object.matches(placeholder.as_str()).count();
            self.object = self.object.replace(placeholder.as_str(), address.as_str());
        }
        count
    }

    ///
    /// Validates that no placeholder is left and decodes the object.
    ///
    pub fn into_linked(self, name: &str) -> Result<LinkedBytecode> {
        if !self.object.is_ascii() {
            return Err(Error::InvalidBytecode {
                name: name.to_owned(),
                reason: "non-ASCII characters".to_owned(),
            });
        }
        if self.has_placeholders() {
            return Err(Error::LinkResolution {
                contract: name.to_owned(),
                unresolved: self.placeholders(),
            });
        }

        hex::decode(self.object.as_str())
            .map(LinkedBytecode)
            .map_err(|error| Error::InvalidBytecode {
                name: name.to_owned(),
                reason: error.to_string(),
            })
    }
}

impl std::fmt::Display for Bytecode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.object)
    }
}

///
/// The bytecode with all library placeholders replaced, ready for deployment.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedBytecode(Vec<u8>);

impl LinkedBytecode {
    ///
    /// Returns the byte length.
    ///
    pub fn len(&self) -> usize {
        self.0.len()
    }

    ///
    /// Whether the bytecode is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// Returns the bytes.
    ///
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    ///
    /// Consumes the wrapper and returns the bytes.
    ///
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}
