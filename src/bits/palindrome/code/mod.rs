//! Palindrome predicate implementations.
//!
//! Every variant answers the same question for the low `width` bits of a
//! `u32`. The bit scan is the reference the others are verified against.

#[cfg(c_implementation_active)]
mod c_impl;
mod lookup;
mod original;
mod unrolled;

#[cfg(c_implementation_active)]
pub use c_impl::is_palindrome_c_bitscan;
pub use lookup::{
    is_palindrome_pattern16, is_palindrome_pattern32, resolve as resolve_lookup, reverse_byte,
    ByteReversalTable,
};
pub use original::is_palindrome_bitscan;
pub use unrolled::{
    for_width as unrolled_for_width, is_palindrome_fixed, resolve as resolve_unrolled,
};

use crate::error::{PalindromeError, Result};
use crate::utils::VariantInfo;

/// Width used by the selector CLI and the benchmarks.
pub const DEFAULT_BITS: u32 = 30;

/// Widest window a `u32` candidate can hold.
pub const MAX_BITS: u32 = u32::BITS;

const _: () = assert!(
    DEFAULT_BITS >= 1 && DEFAULT_BITS <= MAX_BITS,
    "DEFAULT_BITS must fit the u32 candidate type"
);

/// A validated palindrome window, `1..=32` bits.
///
/// Constructing one is the only place an oversized width is caught, so the
/// iteration bound derived from it can never wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Width(u32);

impl Width {
    pub const DEFAULT: Width = Width(DEFAULT_BITS);

    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits > MAX_BITS {
            return Err(PalindromeError::WidthOutOfRange {
                width: bits,
                max: MAX_BITS,
            });
        }
        Ok(Self(bits))
    }

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Mask selecting the low `bits` bits.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        u32::MAX >> (u32::BITS - self.0)
    }

    /// Exclusive upper bound of the candidate range, `2^bits`.
    pub const fn upper_bound(self) -> u64 {
        1u64 << self.0
    }

    /// Number of palindromes in `[0, 2^bits)`: the top half is free, the
    /// bottom half is forced.
    pub const fn expected_palindromes(self) -> u64 {
        1u64 << self.0.div_ceil(2)
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uniform predicate signature. Only the lookup forms read the table.
pub type PalindromeFn = fn(u32, Width, &ByteReversalTable) -> bool;

/// Picks a variant's predicate for one width. Called once before a loop, so
/// per-candidate calls never branch on the width.
pub type ResolveFn = fn(Width) -> PalindromeFn;

fn bitscan_entry(value: u32, width: Width, _table: &ByteReversalTable) -> bool {
    is_palindrome_bitscan(value, width)
}

fn resolve_bitscan(_width: Width) -> PalindromeFn {
    bitscan_entry
}

#[cfg(c_implementation_active)]
fn c_bitscan_entry(value: u32, width: Width, _table: &ByteReversalTable) -> bool {
    is_palindrome_c_bitscan(value, width)
}

#[cfg(c_implementation_active)]
fn resolve_c_bitscan(_width: Width) -> PalindromeFn {
    c_bitscan_entry
}

/// Get all available variants for the current build
pub fn available_variants() -> Vec<VariantInfo<ResolveFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<ResolveFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Bit-by-bit scan with two inward-walking masks",
            function: resolve_bitscan,
        },
        VariantInfo {
            name: "unrolled",
            description: "Unrolled conjunction of bit-pair tests (const width)",
            function: resolve_unrolled,
        },
        VariantInfo {
            name: "lookup",
            description: "Byte-reversal lookup table",
            function: resolve_lookup,
        },
    ];

    #[cfg(c_implementation_active)]
    variants.push(VariantInfo {
        name: "c-bitscan",
        description: "C bit-by-bit scan",
        function: resolve_c_bitscan,
    });

    variants
}

/// The three approaches the selector CLI can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Approach {
    BitScan,
    Unrolled,
    Lookup,
}

impl Approach {
    pub const ALL: [Approach; 3] = [Approach::BitScan, Approach::Unrolled, Approach::Lookup];

    /// Maps the single-character CLI selector to an approach.
    pub fn from_selector(selector: char) -> Option<Self> {
        match selector {
            '1' => Some(Approach::BitScan),
            '2' => Some(Approach::Unrolled),
            '3' => Some(Approach::Lookup),
            _ => None,
        }
    }

    pub fn selector(self) -> char {
        match self {
            Approach::BitScan => '1',
            Approach::Unrolled => '2',
            Approach::Lookup => '3',
        }
    }

    /// Label printed before the scan starts.
    pub fn label(self) -> &'static str {
        match self {
            Approach::BitScan => "Palindrome - naive",
            Approach::Unrolled => "Palindrome - unrolled ands",
            Approach::Lookup => "Palindrome - pattern",
        }
    }

    /// Short name used in the usage text.
    pub fn short_name(self) -> &'static str {
        match self {
            Approach::BitScan => "Naive bit scan",
            Approach::Unrolled => "Unrolled bit-pair tests",
            Approach::Lookup => "Byte-reversal lookup table",
        }
    }
}
