//! Core library components.
//!
//! This module contains the descriptor parsing, secret resolution and
//! auth file writing logic behind `generate-apt-auth`.

pub mod auth_file;
pub mod constants;
pub mod credential;
pub mod descriptor;
pub mod generator;
pub mod secret;

pub use auth_file::AuthFile;
pub use credential::Credential;
pub use descriptor::{AuthEntry, Descriptor};
pub use generator::{AuthFileGenerator, Summary};
pub use secret::SecretSource;
