//! Counts binary palindromes with one selected approach.
//!
//! Usage:
//!   palindrome 1   # bit-by-bit scan
//!   palindrome 2   # unrolled bit-pair tests
//!   palindrome 3   # byte-reversal lookup table

use binary_palindromes::bits::palindrome::DEFAULT_BITS;
use binary_palindromes::cli;
use std::env;
use std::io;

fn main() {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = cli::run(&args, DEFAULT_BITS, &mut out) {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}
