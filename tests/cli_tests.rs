use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_runtime_generics"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run runtime_generics binary")
}

#[test]
fn test_no_argument_prints_sizes() {
    let output = run_cli(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n2\n");
}

#[test]
fn test_other_argument_prints_sizes() {
    for arg in ["pass", "FAIL", "failure"] {
        let output = run_cli(&[arg]);
        assert!(output.status.success(), "argument {:?}", arg);
        assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n2\n");
    }
}

#[test]
fn test_fail_argument_exits_with_error() {
    let output = run_cli(&["fail"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Type mismatch"), "stderr: {}", stderr);
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_runtime_generics"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run runtime_generics binary");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n2\n");
}
