//! Tests for `update-secrets aws-secrets-manager`.
//!
//! Only paths that stop before the network are exercised here.

use crate::support::*;

#[test]
fn test_dry_run_masks_secret() {
    let t = Test::with_token();

    let output = t.secrets_manager(DEV_PROFILE, &["-e", "dev", "-f", TOKEN_FILE, "-s", SECRET_ARN]);

    assert_dry_run(&output, "[aws-secrets-manager]");
    assert_row(&output, "env", "dev");
    assert_row(&output, "file path", "testtoken.yaml");
    assert_row(&output, "region", "ap-northeast-1");
    assert_row(&output, "secret name", "arn:aws:secretsmanager:ap-northeast-1:***:secret:mya***");
    assert_stdout_excludes(&output, "123456789012");
    assert_stdout_excludes(&output, "s3cr3t-value");
}

#[test]
fn test_region_flag() {
    let t = Test::with_token();

    let output = t.secrets_manager(
        DEV_PROFILE,
        &["-e", "dev", "-f", TOKEN_FILE, "-s", "myapp/token", "-r", "us-east-2"],
    );

    assert_success(&output);
    assert_row(&output, "region", "us-east-2");
}

#[test]
fn test_reveal_shows_reference_and_contents() {
    let t = Test::with_token();

    let output = t.secrets_manager(
        DEV_PROFILE,
        &["-e", "dev", "-f", TOKEN_FILE, "-s", SECRET_ARN, "--reveal"],
    );

    assert_success(&output);
    assert_stdout_contains(&output, SECRET_ARN);
    assert_stdout_contains(&output, "s3cr3t-value");
}

#[test]
fn test_aws_alias() {
    let t = Test::with_token();

    let output = t
        .cmd()
        .args(["aws", "-e", "dev", "-f", TOKEN_FILE, "-s", "token", "-p", DEV_PROFILE])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "[aws-secrets-manager]");
}

#[test]
fn test_missing_secret_is_usage_error() {
    let t = Test::with_token();

    let output = t.secrets_manager(DEV_PROFILE, &["-e", "dev", "-f", TOKEN_FILE, "-a"]);

    assert_usage_error(&output, "You must set [-e, -f, -s] options.");
}

#[test]
fn test_invalid_env_is_usage_error() {
    let t = Test::with_token();

    let output = t.secrets_manager(
        "myapp-prod",
        &["-e", "prod", "-f", TOKEN_FILE, "-s", "token", "-a"],
    );

    assert_usage_error(&output, "available env name is [dev, stg, prd]");
}

#[test]
fn test_profile_mismatch_is_usage_error() {
    let t = Test::with_token();

    let output = t.secrets_manager(DEV_PROFILE, &["-e", "prd", "-f", TOKEN_FILE, "-s", "token", "-a"]);

    assert_usage_error(&output, "env name inconsistent with AWS profile");
    assert_stdout_excludes(&output, "SecretsManager updated.");
}

#[test]
fn test_no_profile_is_usage_error() {
    let t = Test::with_token();

    let output = t.run(&["aws-secrets-manager", "-e", "dev", "-f", TOKEN_FILE, "-s", "token"]);

    assert_usage_error(&output, "env name inconsistent with AWS profile");
}

#[test]
fn test_unreadable_file_is_fatal() {
    let t = Test::new();

    let output = t.secrets_manager(DEV_PROFILE, &["-e", "dev", "-f", "missing.yaml", "-s", "token", "-a"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read missing.yaml");
    assert_stdout_excludes(&output, "SecretsManager updated.");
}
