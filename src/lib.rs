//! apt-auth - APT repository credentials from AWS Secrets Manager.
//!
//! Reads a JSON descriptor of `{"machine", "authFrom"}` pairs, fetches
//! each secret and writes `/etc/apt/auth.conf.d/50user` with mode 0600.
//! Intended to run once at instance bootstrap.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Wire the backend and generator together
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── descriptor    # Descriptor file and entries
//!     ├── secret/       # Secret backends
//!     │   ├── mod       # SecretSource trait
//!     │   └── aws       # AWS Secrets Manager implementation
//!     ├── credential    # Login/password extraction
//!     ├── auth_file     # auth.conf writer
//!     └── generator     # AuthFileGenerator
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use apt_auth::core::{secret, AuthFileGenerator};
//!
//! # fn main() -> apt_auth::error::Result<()> {
//! let source = secret::default_source(None)?;
//! let summary = AuthFileGenerator::new(source).generate(Path::new("/etc/apt-auth.json"))?;
//! println!("wrote {} entries", summary.entries);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
