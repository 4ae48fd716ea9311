//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an update-secrets command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and the AWS config paths inside the temporary home directory
    /// - the fake `op` selected through `UPDATE_SECRETS_OP_PATH`
    /// - no inherited AWS profile, region, log filter or config file
    /// - current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("update-secrets").expect("failed to find update-secrets binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("AWS_CONFIG_FILE", self.home.path().join(".aws").join("config"));
        cmd.env(
            "AWS_SHARED_CREDENTIALS_FILE",
            self.home.path().join(".aws").join("credentials"),
        );
        cmd.env("UPDATE_SECRETS_OP_PATH", self.op_path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "AWS_PROFILE",
            "AWS_REGION",
            "AWS_DEFAULT_REGION",
            "UPDATE_SECRETS_LOG",
            "UPDATE_SECRETS_CONFIG",
            "FAKE_OP_FAIL_VAULT",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run with `args` and return the output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run update-secrets")
    }

    /// Shortcut for `update-secrets 1password`.
    pub fn onepassword(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("1password")
            .args(args)
            .output()
            .expect("failed to run update-secrets 1password")
    }

    /// Shortcut for `update-secrets aws-secrets-manager` under `profile`.
    pub fn secrets_manager(&self, profile: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg("aws-secrets-manager")
            .args(args)
            .env("AWS_PROFILE", profile)
            .output()
            .expect("failed to run update-secrets aws-secrets-manager")
    }
}
