use std::process::{Command, Output};

fn bitsy(argv: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bitsy"))
        .args(argv)
        .output()
        .unwrap()
}

fn counts(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.contains("set bits in"))
        .filter_map(|line| line.split_whitespace().nth(1).map(str::to_string))
        .collect()
}

#[test]
fn test_run_reports_both_algorithms() {
    let out = bitsy(&["-s", "100", "-b", "16", "-l", "8"]);
    assert!(out.status.success());
    let counts = counts(&out.stdout);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0], counts[1]);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let argv = ["-s", "100", "-b", "32", "-l", "8", "--seed", "3"];
    let first = bitsy(&argv);
    let second = bitsy(&argv);
    assert!(first.status.success());
    assert_eq!(counts(&first.stdout), counts(&second.stdout));
}

#[test]
fn test_misaligned_lookup_exits_with_error() {
    let out = bitsy(&["--bits", "16", "--lookup", "5"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("does not evenly divide"));
}

#[test]
fn test_default_lookup_too_wide_exits_with_error() {
    let out = bitsy(&["--bits", "32"]);
    assert_eq!(out.status.code(), Some(1));
}
