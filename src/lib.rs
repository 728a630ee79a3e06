//! # Binary Palindromes
//!
//! Counts the values of a fixed-width range whose binary representation reads
//! the same in both directions, using three interchangeable predicates: a bit
//! scan, an unrolled bit-pair conjunction and a byte-reversal lookup table.

pub mod bits;
pub mod cli;
pub mod error;
pub mod utils;

pub use error::{PalindromeError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::bits::palindrome::scan::{count_palindromes, run_approach};
    pub use crate::bits::palindrome::{Approach, ByteReversalTable, Width, DEFAULT_BITS};
    pub use crate::bits::palindrome::bench::run_benchmarks;
}
