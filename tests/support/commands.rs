//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a generate-apt-auth command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - Color, logging and output overrides cleared
    /// - AWS region pinned so no instance metadata lookup happens
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("generate-apt-auth")
            .expect("failed to find generate-apt-auth binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("APT_AUTH_LOG");
        cmd.env_remove("APT_AUTH_OUTPUT");
        cmd.env_remove("DEBUG");
        cmd.env("AWS_REGION", "us-east-1");
        cmd
    }

    /// Run the generator on the test descriptor, writing to the test auth file.
    pub fn generate(&self) -> Output {
        self.cmd()
            .arg("--output")
            .arg(self.auth_file())
            .arg(self.descriptor())
            .output()
            .expect("failed to run generate-apt-auth")
    }

    /// Run the generator with extra arguments before the descriptor.
    pub fn generate_with(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("--output")
            .arg(self.auth_file())
            .args(args)
            .arg(self.descriptor())
            .output()
            .expect("failed to run generate-apt-auth")
    }
}
