//! Tests for `update-secrets secret`, which takes its region from the profile.

use crate::support::*;

#[test]
fn test_region_from_profile() {
    let t = Test::with_token();
    t.aws_profile(DEV_PROFILE, Some("us-west-2"));

    let output = t.run(&["secret", "-e", "dev", "-f", TOKEN_FILE, "-s", "myapp/token", "-p", DEV_PROFILE]);

    assert_success(&output);
    assert_row(&output, "region", "us-west-2");
    assert_row(&output, "secret name", "mya***");
}

#[test]
fn test_profile_from_environment() {
    let t = Test::with_token();
    t.aws_profile(DEV_PROFILE, Some("eu-west-1"));

    let output = t
        .cmd()
        .args(["secret", "-e", "dev", "-f", TOKEN_FILE, "-s", "myapp/token"])
        .env("AWS_PROFILE", DEV_PROFILE)
        .output()
        .unwrap();

    assert_success(&output);
    assert_row(&output, "profile", "myapp-dev");
    assert_row(&output, "region", "eu-west-1");
}

#[test]
fn test_profile_without_region_fails() {
    let t = Test::with_token();
    t.aws_profile(DEV_PROFILE, None);

    let output = t.run(&["secret", "-e", "dev", "-f", TOKEN_FILE, "-s", "token", "-p", DEV_PROFILE]);

    assert_failure(&output);
    assert_stderr_contains(&output, "no region configured for AWS profile 'myapp-dev'");
}

#[test]
fn test_stg_profile_check() {
    let t = Test::with_token();

    let output = t.run(&["secret", "-e", "stg", "-f", TOKEN_FILE, "-s", "token", "-p", DEV_PROFILE]);

    assert_usage_error(&output, "env name inconsistent with AWS profile");
}
