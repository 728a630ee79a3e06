//! # Binary Palindromes
//!
//! A value is a binary palindrome for a width `W` when its low `W` bits read
//! the same in both directions, e.g. `10000001` for `W = 8`.
//!
//! ## Variants
//!
//! - **Bit scan**: two masks walk inward comparing one pair per step (reference)
//! - **Unrolled**: a fixed `&&` chain of bit-pair tests, width known at compile time
//! - **Lookup**: bytes are compared against the bit reversal of their mirror byte
//!   using a 256-entry table
//!
//! The scan driver in [`scan`] counts palindromes over the whole range
//! `[0, 2^W)`. [`bench`] times the variants on random candidates instead.

pub mod bench;
pub mod code;
pub mod scan;
pub mod test;

pub use code::*;
