//! Runs the built `palindrome` binary. The default-width runs scan 2^30
//! candidates each and are ignored unless asked for.

use std::process::Command;

fn palindrome(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_palindrome"))
        .args(args)
        .output()
        .expect("failed to launch palindrome binary")
}

fn assert_usage(args: &[&str]) {
    let output = palindrome(args);
    assert_eq!(output.status.code(), Some(1), "args {:?}", args);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Binary Palindromes\n"), "args {:?}", args);
    assert!(stdout.contains("Usage: palindrome {approach}"), "args {:?}", args);
    assert!(!stdout.contains("palindromes found"), "args {:?}", args);
}

#[test]
fn test_no_arguments_prints_usage() {
    assert_usage(&[]);
}

#[test]
fn test_multi_character_argument_prints_usage() {
    assert_usage(&["42"]);
}

#[test]
fn test_unknown_selector_prints_usage() {
    assert_usage(&["9"]);
}

#[test]
fn test_extra_arguments_print_usage() {
    assert_usage(&["1", "2"]);
}

#[test]
#[ignore = "scans 2^30 candidates per approach; run with `cargo test --release -- --ignored`"]
fn test_each_approach_at_default_width() {
    for (arg, label) in [
        ("1", "Palindrome - naive"),
        ("2", "Palindrome - unrolled ands"),
        ("3", "Palindrome - pattern"),
    ] {
        let output = palindrome(&[arg]);
        assert_eq!(output.status.code(), Some(0), "approach {}", arg);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            format!(
                "Binary Palindromes\n{}\n32768 palindromes found with respect to 30 bits.\n",
                label
            )
        );
        assert!(output.stderr.is_empty(), "approach {}", arg);
    }
}
