//! Test fixtures and constants.

use std::cell::RefCell;
use std::collections::HashMap;

use apt_auth::core::SecretSource;
use apt_auth::error::{Result, SecretError};

/// Secret locator used by single-entry scenarios.
pub const SECRET_ARN: &str = "arn:aws:secretsmanager:us-west-2:123456789012:secret:repo-creds";

/// Repository host used by single-entry scenarios.
pub const REPO_HOST: &str = "repo.example.com";

/// Descriptor for a single repository.
pub const SINGLE_DESCRIPTOR: &str = r#"[{"machine":"repo.example.com","authFrom":"arn:aws:secretsmanager:us-west-2:123456789012:secret:repo-creds"}]"#;

/// Three repositories, each with its own secret.
pub const STANDARD_REPOS: &[(&str, &str)] = &[
    ("repo1.example.com", "arn:secret:repo1"),
    ("repo2.example.com", "arn:secret:repo2"),
    ("repo3.example.com", "arn:secret:repo3"),
];

/// In-memory secret backend recording every lookup.
///
/// Unknown locators fail like a missing Secrets Manager secret; locators
/// registered with `deny` fail with an access-denied error.
#[derive(Default)]
pub struct FakeSecrets {
    values: HashMap<String, String>,
    denied: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw secret payload.
    pub fn with(mut self, locator: &str, payload: &str) -> Self {
        self.values.insert(locator.to_string(), payload.to_string());
        self
    }

    /// Register a single login/password pair.
    pub fn with_pair(self, locator: &str, login: &str, password: &str) -> Self {
        let payload = serde_json::json!({ login: password }).to_string();
        self.with(locator, &payload)
    }

    /// Make lookups of `locator` fail with AccessDeniedException.
    pub fn deny(mut self, locator: &str) -> Self {
        self.denied.push(locator.to_string());
        self
    }

    /// Locators requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SecretSource for FakeSecrets {
    fn fetch_secret(&self, locator: &str) -> Result<String> {
        self.calls.borrow_mut().push(locator.to_string());

        if self.denied.iter().any(|d| d == locator) {
            return Err(SecretError::Access {
                locator: locator.to_string(),
                code: "AccessDeniedException".to_string(),
                message: "User is not authorized to perform: secretsmanager:GetSecretValue"
                    .to_string(),
            }
            .into());
        }

        self.values.get(locator).cloned().ok_or_else(|| {
            SecretError::Access {
                locator: locator.to_string(),
                code: "ResourceNotFoundException".to_string(),
                message: "Secret not found".to_string(),
            }
            .into()
        })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
