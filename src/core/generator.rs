//! Auth file generation.
//!
//! Drives the whole run: open the auth file, read the descriptor, resolve
//! each entry's secret in order, append its line, then close the file and
//! restrict its mode. The first error aborts the run; lines written for
//! earlier entries stay in the file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::auth_file::AuthFile;
use crate::core::constants::DEFAULT_AUTH_FILE;
use crate::core::credential::Credential;
use crate::core::descriptor::{AuthEntry, Descriptor};
use crate::core::secret::SecretSource;
use crate::error::Result;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of lines written.
    pub entries: usize,
    /// Auth file location.
    pub path: PathBuf,
}

/// Builds an APT auth file from a descriptor and a secret backend.
pub struct AuthFileGenerator<S> {
    source: S,
    output: PathBuf,
}

impl<S: SecretSource> AuthFileGenerator<S> {
    /// Create a generator writing to the default auth file location.
    pub fn new(source: S) -> Self {
        Self::with_output(source, DEFAULT_AUTH_FILE)
    }

    /// Create a generator writing to `output`.
    pub fn with_output(source: S, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Generate the auth file from the descriptor at `descriptor`.
    ///
    /// # Errors
    ///
    /// - `OutputError::Open` if the auth file cannot be opened
    /// - `InputError` if the descriptor is missing or malformed
    /// - entry-scoped `SecretError` if a secret cannot be fetched or decoded
    /// - `OutputError::Restrict` if the final mode cannot be applied
    pub fn generate(&self, descriptor: &Path) -> Result<Summary> {
        info!("starting APT auth configuration generation");
        debug!(descriptor = %descriptor.display(), backend = self.source.name(), "reading auth inputs");

        let mut auth_file = AuthFile::create(&self.output)?;
        let descriptor = Descriptor::load(descriptor)?;
        let total = descriptor.len();
        info!(count = total, "processing repository configurations");

        for (index, entry) in descriptor.entries() {
            let entry = entry?;
            debug!(
                index,
                total,
                machine = %entry.machine,
                secret = %entry.secret_ref,
                "processing repository"
            );

            let credential = self
                .resolve(&entry)
                .map_err(|e| e.in_entry(index, &entry.machine))?;
            auth_file
                .append(&entry.machine, &credential)
                .map_err(|e| e.in_entry(index, &entry.machine))?;

            debug!(machine = %entry.machine, "written auth entry");
        }

        let entries = auth_file.entries();
        let path = auth_file.finish()?;

        info!(
            count = entries,
            path = %path.display(),
            "generated APT auth configuration"
        );
        Ok(Summary { entries, path })
    }

    fn resolve(&self, entry: &AuthEntry) -> Result<Credential> {
        let payload = self.source.fetch_secret(&entry.secret_ref)?;
        Credential::from_secret(&entry.secret_ref, &payload)
    }
}
