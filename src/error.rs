//! Error types.
//!
//! Errors are grouped by the stage that raised them: reading the
//! descriptor, resolving a secret, or producing the auth file. Every
//! variant maps to one [`ErrorKind`] so the binary can report a stable
//! failure category.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure category reported to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Descriptor missing, unreadable or not a JSON array of objects.
    InputFormat,
    /// Descriptor entry lacks `machine` or `authFrom`.
    MissingField,
    /// The secret backend call failed.
    SecretAccess,
    /// The secret payload is not a JSON object.
    SecretFormat,
    /// The secret payload holds no credential pair.
    EmptySecret,
    /// The auth file could not be opened or its mode restricted.
    Permission,
    /// Writing content to an already opened auth file failed.
    Write,
}

impl ErrorKind {
    /// Human readable category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputFormat => "input format error",
            Self::MissingField => "missing field error",
            Self::SecretAccess => "secret access error",
            Self::SecretFormat => "secret format error",
            Self::EmptySecret => "empty secret error",
            Self::Permission => "permission error",
            Self::Write => "write error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// An error raised while processing one descriptor entry.
    #[error("entry {index} ({machine}): {source}")]
    Entry {
        index: usize,
        machine: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach descriptor entry context to an error.
    pub fn in_entry(self, index: usize, machine: &str) -> Self {
        Self::Entry {
            index,
            machine: machine.to_string(),
            source: Box::new(self),
        }
    }

    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(e) => e.kind(),
            Self::Secret(e) => e.kind(),
            Self::Output(e) => e.kind(),
            Self::Entry { source, .. } => source.kind(),
        }
    }

    /// Innermost error, skipping entry context.
    pub fn root(&self) -> &Error {
        match self {
            Self::Entry { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Descriptor errors.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read descriptor {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in descriptor {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("descriptor {} must contain a JSON array", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("entry {index} is not a JSON object")]
    EntryNotObject { index: usize },

    #[error("entry {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            _ => ErrorKind::InputFormat,
        }
    }
}

/// Secret backend and payload errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("cannot fetch secret {locator} ({code}): {message}")]
    Access {
        locator: String,
        code: String,
        message: String,
    },

    #[error("secret {locator} has no string value")]
    NoStringValue { locator: String },

    #[error("secret {locator} is not valid JSON: {source}")]
    Parse {
        locator: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("secret {locator} must be a JSON object")]
    NotAnObject { locator: String },

    #[error("secret {locator} holds no login/password pair")]
    Empty { locator: String },
}

impl SecretError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Access { .. } => ErrorKind::SecretAccess,
            Self::NoStringValue { .. } | Self::Parse { .. } | Self::NotAnObject { .. } => {
                ErrorKind::SecretFormat
            }
            Self::Empty { .. } => ErrorKind::EmptySecret,
        }
    }

    /// Backend error code, for access failures.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Access { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Auth file errors.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("cannot open {} for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot restrict permissions on {} to {mode:o}: {source}", .path.display())]
    Restrict {
        path: PathBuf,
        mode: u32,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } | Self::Restrict { .. } => ErrorKind::Permission,
            Self::Write { .. } => ErrorKind::Write,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
