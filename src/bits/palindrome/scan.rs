//! Scan driver: runs one predicate over every candidate in `[0, 2^width)`.

use super::code::{
    is_palindrome_bitscan, resolve_lookup, unrolled_for_width, Approach, ByteReversalTable, Width,
};
use crate::error::Result;
use std::io::Write;

/// Counts the candidates in `[0, 2^width)` accepted by `is_palindrome`.
///
/// The bound is a `u64`, so a 32-bit window still terminates.
pub fn count_palindromes<F>(width: Width, mut is_palindrome: F) -> u64
where
    F: FnMut(u32) -> bool,
{
    let mut count = 0u64;
    for candidate in 0..width.upper_bound() {
        // upper_bound() <= 2^32, so every candidate fits.
        let value = candidate as u32;
        if !is_palindrome(value) {
            continue;
        }
        #[cfg(feature = "print_matches")]
        println!("{}", describe(value, width));
        count += 1;
    }
    count
}

/// Runs the full scan for one approach. The lookup approach builds its table
/// before the loop starts.
pub fn run_approach(approach: Approach, width: Width) -> u64 {
    match approach {
        Approach::BitScan => count_palindromes(width, |v| is_palindrome_bitscan(v, width)),
        Approach::Unrolled => count_palindromes(width, unrolled_for_width(width)),
        Approach::Lookup => {
            let table = ByteReversalTable::new();
            let is_palindrome = resolve_lookup(width);
            count_palindromes(width, |v| is_palindrome(v, width, &table))
        }
    }
}

/// Prints the approach label, scans, and prints the count line.
pub fn report<W: Write>(approach: Approach, width: Width, out: &mut W) -> Result<u64> {
    writeln!(out, "{}", approach.label())?;
    out.flush()?;

    let count = run_approach(approach, width);
    writeln!(
        out,
        "{} palindromes found with respect to {} bits.",
        count, width
    )?;
    Ok(count)
}

/// Renders the low `width` bits of `value`, most significant first.
pub fn format_bits(value: u32, width: Width) -> String {
    (0..width.bits())
        .rev()
        .map(|bit| if value & (1 << bit) != 0 { '1' } else { '0' })
        .collect()
}

/// Hex value followed by its bit string, e.g. `81 10000001`.
pub fn describe(value: u32, width: Width) -> String {
    format!("{:x} {}", value, format_bits(value, width))
}
