//! Tests for `update-secrets 1password`.

use crate::support::*;

#[test]
fn test_dry_run_edit_prints_summary() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "Private", "-t", "token", "-f", TOKEN_FILE]);

    assert_dry_run(&output, "[onepassword]");
    assert_row(&output, "operation", "edit");
    assert_row(&output, "file path", "testtoken.yaml");
    assert_row(&output, "vault", "Private");
    assert_row(&output, "title", "token");
    assert!(t.op_calls().is_empty());
}

#[test]
fn test_dry_run_create_without_title() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "Private", "-f", TOKEN_FILE, "-o", "create"]);

    assert_success(&output);
    assert_row(&output, "operation", "create");
    assert_row(&output, "title", "(not specified)");
    assert!(t.op_calls().is_empty());
}

#[test]
fn test_op_alias() {
    let t = Test::with_token();

    let output = t.run(&["op", "-v", "Private", "-t", "token", "-f", TOKEN_FILE]);

    assert_success(&output);
    assert_stdout_contains(&output, "[onepassword]");
}

#[test]
fn test_missing_vault_is_usage_error() {
    let t = Test::with_token();

    let output = t.onepassword(&["-t", "token", "-f", TOKEN_FILE, "-a"]);

    assert_usage_error(&output, "You must set [-v, -t, -f] options.");
    assert!(t.op_calls().is_empty());
}

#[test]
fn test_edit_without_title_is_usage_error() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "Private", "-f", TOKEN_FILE, "-a"]);

    assert_usage_error(&output, "Set title of item with [-t] option.");
    assert!(t.op_calls().is_empty());
}

#[test]
fn test_unknown_operation_is_usage_error() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "Private", "-t", "x", "-f", TOKEN_FILE, "-o", "delete"]);

    assert_usage_error(&output, "available operation is [edit, create]");
}

#[test]
fn test_create_with_vault_list_is_usage_error() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "a,b", "-f", TOKEN_FILE, "-o", "create", "-a"]);

    assert_usage_error(&output, "create operation takes a single vault");
    assert!(t.op_calls().is_empty());
}

#[test]
fn test_missing_file_fails_before_op() {
    let t = Test::new();

    let output = t.onepassword(&["-v", "Private", "-t", "token", "-f", "nope.yaml", "-a"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read nope.yaml");
    assert!(t.op_calls().is_empty());
}

#[cfg(unix)]
#[test]
fn test_apply_edit_each_vault_in_order() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "dev-a,dev-b,dev-c", "-t", "token", "-f", TOKEN_FILE, "-a"]);

    assert_success(&output);
    assert_eq!(
        t.op_calls(),
        vec![
            "edit document token testtoken.yaml --vault dev-a",
            "edit document token testtoken.yaml --vault dev-b",
            "edit document token testtoken.yaml --vault dev-c",
        ]
    );
    assert_stdout_contains(&output, "edit document in vault dev-c");
    assert_stdout_contains(&output, "1password updated.");
}

#[cfg(unix)]
#[test]
fn test_apply_stops_at_failing_vault() {
    let t = Test::with_token();

    let output = t
        .cmd()
        .args(["1password", "-v", "dev-a,dev-b,dev-c", "-t", "token", "-f", TOKEN_FILE, "-a"])
        .env("FAKE_OP_FAIL_VAULT", "dev-b")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "\"dev-b\" isn't a vault in this account.");
    assert_stdout_contains(&output, "edit document in vault dev-a");
    assert_stdout_excludes(&output, "1password updated.");
    assert_eq!(t.op_calls().len(), 2);
}

#[cfg(unix)]
#[test]
fn test_apply_create_with_title() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "Private", "-t", "api token", "-f", TOKEN_FILE, "-o", "create", "-a"]);

    assert_success(&output);
    assert_eq!(
        t.op_calls(),
        vec!["create document testtoken.yaml --vault Private --title api token"]
    );
}

#[cfg(unix)]
#[test]
fn test_apply_create_without_title() {
    let t = Test::with_token();

    let output = t.onepassword(&["-v", "Private", "-f", TOKEN_FILE, "-o", "create", "-a"]);

    assert_success(&output);
    assert_eq!(
        t.op_calls(),
        vec!["create document testtoken.yaml --vault Private"]
    );
}
