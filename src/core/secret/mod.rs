//! Secret backends.
//!
//! The generator resolves each descriptor locator through a
//! [`SecretSource`]. Production builds use AWS Secrets Manager; tests
//! substitute an in-memory implementation.
//!
//! ## Backends
//!
//! - **AWS Secrets Manager**: feature-gated (`aws`, on by default).
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file
//! 3. Feature-gate if it pulls in a client SDK
//! 4. Return it from `default_source`

use crate::error::Result;

#[cfg(feature = "aws")]
pub mod aws;

/// Source of secret payloads.
pub trait SecretSource {
    /// Fetch the secret string stored at `locator`.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::Access` with the backend's error code and
    /// message on any backend failure, or `SecretError::NoStringValue`
    /// if the secret exists but holds no string.
    fn fetch_secret(&self, locator: &str) -> Result<String>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
    fn fetch_secret(&self, locator: &str) -> Result<String> {
        (**self).fetch_secret(locator)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn fetch_secret(&self, locator: &str) -> Result<String> {
        (**self).fetch_secret(locator)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Create the backend compiled into this build.
///
/// `region` overrides the AWS region resolved from the environment.
#[cfg(feature = "aws")]
pub fn default_source(region: Option<String>) -> Result<Box<dyn SecretSource>> {
    Ok(Box::new(aws::SecretsManager::new(region)?))
}

/// Create the backend compiled into this build.
///
/// Without the `aws` feature every fetch fails, so only empty
/// descriptors succeed.
#[cfg(not(feature = "aws"))]
pub fn default_source(_region: Option<String>) -> Result<Box<dyn SecretSource>> {
    Ok(Box::new(Unavailable))
}

/// Placeholder backend for builds without a secret client.
#[cfg(not(feature = "aws"))]
#[derive(Debug)]
struct Unavailable;

#[cfg(not(feature = "aws"))]
impl SecretSource for Unavailable {
    fn fetch_secret(&self, locator: &str) -> Result<String> {
        Err(crate::error::SecretError::Access {
            locator: locator.to_string(),
            code: "BackendUnavailable".to_string(),
            message: "AWS Secrets Manager not compiled. Rebuild with: --features aws".to_string(),
        }
        .into())
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
