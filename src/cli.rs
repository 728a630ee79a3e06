//! Selector CLI: `palindrome <approach>`.
//!
//! Kept in the library so the argument handling can be exercised without a
//! full 2^30 scan.

use crate::bits::palindrome::scan;
use crate::bits::palindrome::{Approach, Width};
use crate::error::{PalindromeError, Result};
use std::io::Write;

pub const BANNER: &str = "Binary Palindromes";

/// Writes the usage text.
pub fn write_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Usage: palindrome {{approach}}")?;
    writeln!(out, "Where {{approach}} is:")?;
    for approach in Approach::ALL {
        writeln!(out, "  {} {}", approach.selector(), approach.short_name())?;
    }
    Ok(())
}

/// Parses the arguments that follow the program name. Exactly one argument of
/// exactly one character is accepted.
pub fn parse_approach<S: AsRef<str>>(args: &[S]) -> Result<Approach> {
    let [arg] = args else {
        return Err(PalindromeError::Usage(format!(
            "expected 1 argument, got {}",
            args.len()
        )));
    };

    let arg: &str = arg.as_ref();
    let mut chars = arg.chars();
    let (Some(selector), None) = (chars.next(), chars.next()) else {
        return Err(PalindromeError::Usage(format!(
            "approach must be a single character, got {:?}",
            arg
        )));
    };

    Approach::from_selector(selector)
        .ok_or_else(|| PalindromeError::Usage(format!("unknown approach {:?}", selector)))
}

/// Banner, argument parsing and the scan. The usage text is written to `out`
/// before a usage error is returned. `out` is flushed on every path; a failed
/// flush after a successful scan is reported as [`PalindromeError::Io`].
pub fn run<S: AsRef<str>, W: Write>(args: &[S], bits: u32, out: &mut W) -> Result<u64> {
    let result = execute(args, bits, out);
    let flushed = out.flush();
    let count = result?;
    flushed?;
    Ok(count)
}

fn execute<S: AsRef<str>, W: Write>(args: &[S], bits: u32, out: &mut W) -> Result<u64> {
    writeln!(out, "{}", BANNER)?;

    let approach = match parse_approach(args) {
        Ok(approach) => approach,
        Err(err) => {
            write_usage(out)?;
            return Err(err);
        }
    };

    let width = Width::new(bits)?;
    scan::report(approach, width, out)
}
