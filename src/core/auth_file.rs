//! APT auth file writer.
//!
//! Writes `auth.conf` lines of the form
//! `machine <host> login <login> password <password>`. The file is
//! truncated on open, written through a buffer, closed, and only then
//! restricted to mode 0600. Dropping an unfinished `AuthFile` closes it
//! with whatever lines were already appended.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::AUTH_FILE_MODE;
use crate::core::credential::Credential;
use crate::error::{OutputError, Result};

/// Format one auth file line, including the trailing newline.
pub fn format_line(machine: &str, credential: &Credential) -> Zeroizing<String> {
    Zeroizing::new(format!(
        "machine {} login {} password {}\n",
        machine,
        credential.login,
        credential.password.as_str()
    ))
}

/// Set the auth file mode to 0600, whatever its current mode.
pub fn restrict_permissions(path: &Path) -> Result<()> {
    debug!(path = %path.display(), mode = %format!("{:o}", AUTH_FILE_MODE), "restricting permissions");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(AUTH_FILE_MODE)).map_err(
            |source| OutputError::Restrict {
                path: path.to_path_buf(),
                mode: AUTH_FILE_MODE,
                source,
            },
        )?;
    }

    #[cfg(not(unix))]
    {
        // Only existence can be checked without Unix modes.
        fs::metadata(path).map_err(|source| OutputError::Restrict {
            path: path.to_path_buf(),
            mode: AUTH_FILE_MODE,
            source,
        })?;
    }

    Ok(())
}

/// An auth file open for writing.
#[derive(Debug)]
pub struct AuthFile {
    path: PathBuf,
    writer: BufWriter<File>,
    entries: usize,
}

impl AuthFile {
    /// Create or truncate the auth file.
    ///
    /// On Unix a newly created file starts with mode 0600. An existing
    /// file keeps its mode until [`AuthFile::finish`].
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "opening auth file");

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(AUTH_FILE_MODE);
        }

        let file = options.open(&path).map_err(|source| OutputError::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            entries: 0,
        })
    }

    /// Number of lines appended so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Append one entry line.
    pub fn append(&mut self, machine: &str, credential: &Credential) -> Result<()> {
        let line = format_line(machine, credential);
        self.writer
            .write_all(line.as_bytes())
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.entries += 1;
        Ok(())
    }

    /// Flush and close the file, then restrict its permissions.
    ///
    /// Content errors surface as `OutputError::Write`, permission errors
    /// as `OutputError::Restrict`.
    pub fn finish(self) -> Result<PathBuf> {
        let Self { path, writer, .. } = self;

        let file = writer.into_inner().map_err(|e| OutputError::Write {
            path: path.clone(),
            source: e.into_error(),
        })?;
        file.sync_all().map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        drop(file);

        restrict_permissions(&path)?;
        Ok(path)
    }
}
