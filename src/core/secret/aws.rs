//! AWS Secrets Manager backend.
//!
//! Fetches secret strings with `GetSecretValue`. Enabled with
//! `--features aws` (on by default).
//!
//! Credentials and region come from the default AWS provider chain
//! (environment, profile, instance metadata). On an EC2 instance this is
//! the instance profile.

use std::sync::OnceLock;

use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::SecretSource;
use crate::error::{Result, SecretError};

/// AWS Secrets Manager secret source.
///
/// The SDK is async; calls are driven on a private current-thread
/// runtime. The client is built on first use, so a run that fetches
/// nothing never resolves AWS configuration.
pub struct SecretsManager {
    // Dropped before the runtime it was built on.
    client: OnceLock<Client>,
    region: Option<String>,
    runtime: tokio::runtime::Runtime,
}

impl SecretsManager {
    /// Create a backend, optionally pinned to `region`.
    pub fn new(region: Option<String>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SecretError::Access {
                locator: String::new(),
                code: "RuntimeError".to_string(),
                message: format!("failed to create runtime: {}", e),
            })?;

        Ok(Self {
            client: OnceLock::new(),
            region,
            runtime,
        })
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(|| {
            debug!(region = ?self.region, "loading AWS configuration");
            self.runtime.block_on(async {
                let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
                if let Some(region) = &self.region {
                    loader = loader.region(Region::new(region.clone()));
                }
                Client::new(&loader.load().await)
            })
        })
    }
}

impl SecretSource for SecretsManager {
    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }

    fn fetch_secret(&self, locator: &str) -> Result<String> {
        trace!(secret = %locator, "fetching secret from AWS Secrets Manager");

        let client = self.client();
        let output = self
            .runtime
            .block_on(async { client.get_secret_value().secret_id(locator).send().await })
            .map_err(|e| SecretError::Access {
                locator: locator.to_string(),
                code: e.code().unwrap_or("Unknown").to_string(),
                message: e
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&e).to_string()),
            })?;

        let secret = output
            .secret_string()
            .ok_or_else(|| SecretError::NoStringValue {
                locator: locator.to_string(),
            })?;

        trace!(secret_len = secret.len(), "fetched secret");
        Ok(secret.to_string())
    }
}
