//! End-to-end runs of the `linked-sparse` binary over stdin/stdout

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_linked-sparse"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start linked-sparse");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for linked-sparse")
}

const PRODUCT_INPUT: &str = "\
2 2
1 1 1
1 2 2
2 2 3
0 0 0
2 2
1 1 4
1 2 5
2 1 6
2 2 7
0 0 0
";

#[test]
fn test_multiply_succeeds() {
    for repr in ["cross", "triple"] {
        let output = run_cli(&["--repr", repr, "--op", "mul"], PRODUCT_INPUT);

        assert_eq!(output.status.code(), Some(0), "repr {}", repr);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "1 1 16\n1 2 19\n2 1 18\n2 2 21\n"
        );
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn test_add_succeeds() {
    // I + (-I) has no entries
    let input = "2 2\n1 1 1\n2 2 1\n0 0 0\n2 2\n1 1 -1\n2 2 -1\n0 0 0\n";
    let output = run_cli(&["--op", "add"], input);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_dimension_mismatch_exits_with_failure() {
    let input = "2 3\n1 1 1\n0 0 0\n2 3\n1 1 1\n0 0 0\n";
    let output = run_cli(&["--op", "mul"], input);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid dimensions for mul: 2×3 and 2×3"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_malformed_input_exits_with_failure() {
    let output = run_cli(&["--repr", "triple"], "2 2\n1 x 3\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse error on line 2"), "stderr: {}", stderr);
}

#[test]
fn test_missing_second_matrix_exits_with_failure() {
    let output = run_cli(&[], "1 1\n1 1 5\n0 0 0\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing matrix B"), "stderr: {}", stderr);
}
