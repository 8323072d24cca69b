//! Descriptor parsing.
//!
//! The descriptor is a JSON array of `{"machine": ..., "authFrom": ...}`
//! objects. The array is parsed up front, while each element is validated
//! only when the generator reaches it, so entries before a malformed one
//! are still written.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::core::constants::{MACHINE_FIELD, SECRET_FIELD};
use crate::error::{InputError, Result};

/// One repository/secret pair from the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthEntry {
    /// Repository host, written verbatim to the auth file.
    pub machine: String,
    /// Secret locator passed to the secret backend.
    #[serde(rename = "authFrom")]
    pub secret_ref: String,
}

impl AuthEntry {
    pub fn new(machine: impl Into<String>, secret_ref: impl Into<String>) -> Self {
        Self {
            machine: machine.into(),
            secret_ref: secret_ref.into(),
        }
    }

    /// Validate a raw descriptor element.
    ///
    /// `index` is 1-based and only used for diagnostics. A field that is
    /// absent, not a string, or empty counts as missing.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(InputError::EntryNotObject { index })?;

        let field = |name: &'static str| -> Result<String> {
            match object.get(name).and_then(Value::as_str) {
                Some(s) if !s.is_empty() => Ok(s.to_string()),
                _ => Err(InputError::MissingField { index, field: name }.into()),
            }
        };

        Ok(Self {
            machine: field(MACHINE_FIELD)?,
            secret_ref: field(SECRET_FIELD)?,
        })
    }
}

/// Parsed descriptor file.
#[derive(Debug)]
pub struct Descriptor {
    entries: Vec<Value>,
}

impl Descriptor {
    /// Read and parse a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the file cannot be read, is not valid JSON,
    /// or is not a JSON array.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading descriptor");

        let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value = serde_json::from_str(&contents).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Array(entries) => Ok(Self { entries }),
            _ => Err(InputError::NotAnArray {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in file order, validating each lazily.
    ///
    /// Yields `(index, entry)` with a 1-based index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Result<AuthEntry>)> + '_ {
        self.entries.iter().enumerate().map(|(i, value)| {
            let index = i + 1;
            (index, AuthEntry::from_value(index, value))
        })
    }
}
