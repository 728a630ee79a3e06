//! Bit-manipulation algorithms.

pub mod palindrome;
