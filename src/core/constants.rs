//! Constants used throughout apt-auth.
//!
//! Centralizes paths, modes and names shared by the library and the CLI.

/// Default auth file location read by APT.
pub const DEFAULT_AUTH_FILE: &str = "/etc/apt/auth.conf.d/50user";

/// Final permission mode of the auth file (rw-------).
pub const AUTH_FILE_MODE: u32 = 0o600;

/// Descriptor key holding the repository host.
pub const MACHINE_FIELD: &str = "machine";

/// Descriptor key holding the secret locator.
pub const SECRET_FIELD: &str = "authFrom";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "APT_AUTH_LOG";

/// Environment variable enabling debug logs when set to any non-empty value.
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable overriding the auth file location.
pub const OUTPUT_ENV: &str = "APT_AUTH_OUTPUT";
