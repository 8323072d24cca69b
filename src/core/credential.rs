//! Credential extraction from secret payloads.
//!
//! A secret is expected to hold a single `{"<login>": "<password>"}` pair.
//! Only the first pair, in the order the backend serialized it, is used.
//! This works for single-pair secrets only; additional pairs are ignored.

use std::fmt;

use serde_json::Value;
use zeroize::Zeroizing;

use crate::error::{Result, SecretError};

/// A login/password pair resolved from a secret.
pub struct Credential {
    pub login: String,
    pub password: Zeroizing<String>,
}

impl Credential {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Decode a secret string and take its first key/value pair.
    ///
    /// String values are used verbatim; any other JSON value is rendered
    /// as compact JSON text.
    ///
    /// # Errors
    ///
    /// - `SecretError::Parse` if the payload is not valid JSON
    /// - `SecretError::NotAnObject` if it is JSON but not an object
    /// - `SecretError::Empty` if the object has no keys
    pub fn from_secret(locator: &str, payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload).map_err(|source| SecretError::Parse {
            locator: locator.to_string(),
            source,
        })?;

        let Value::Object(map) = value else {
            return Err(SecretError::NotAnObject {
                locator: locator.to_string(),
            }
            .into());
        };

        let (login, password) = map.into_iter().next().ok_or_else(|| SecretError::Empty {
            locator: locator.to_string(),
        })?;

        let password = match password {
            Value::String(s) => s,
            other => other.to_string(),
        };

        Ok(Self::new(login, password))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}
