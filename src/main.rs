//! generate-apt-auth - write APT repository credentials at instance bootstrap.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use apt_auth::cli::output;
use apt_auth::cli::{execute, Cli, LogFormat};
use apt_auth::core::constants::LOG_ENV;
use apt_auth::error::{Error, ErrorKind, SecretError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.debug_enabled() {
            EnvFilter::new("apt_auth=debug")
        } else {
            EnvFilter::new("apt_auth=info")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    if let Err(e) = execute(&cli) {
        let kind = e.kind();
        let suggestion = match (kind, e.root()) {
            (ErrorKind::Permission, _) => Some("run as root or pass --output <PATH>"),
            (_, Error::Secret(SecretError::Access { code, .. }))
                if code == "AccessDeniedException" =>
            {
                Some("check that the instance role allows secretsmanager:GetSecretValue")
            }
            (ErrorKind::MissingField, _) => {
                Some("each descriptor entry needs \"machine\" and \"authFrom\"")
            }
            _ => None,
        };

        output::error(&format!("{}: {}", kind, e));
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
