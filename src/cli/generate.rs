//! Generate command - write the APT auth file.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::secret;
use crate::core::AuthFileGenerator;
use crate::error::Result;

/// Resolve every descriptor entry and write the auth file to `auth_file`.
pub fn execute(descriptor: &Path, auth_file: &Path, region: Option<String>) -> Result<()> {
    let source = secret::default_source(region)?;
    debug!(backend = source.name(), "secret backend ready");

    let summary = AuthFileGenerator::with_output(source, auth_file).generate(descriptor)?;

    output::success(&format!(
        "wrote {} {} to {}",
        summary.entries,
        if summary.entries == 1 { "entry" } else { "entries" },
        output::path(&summary.path.display().to_string())
    ));
    Ok(())
}
