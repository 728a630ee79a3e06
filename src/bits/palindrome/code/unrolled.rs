//! Unrolled conjunction of bit-pair tests.
//!
//! For a width known at compile time the check is a straight chain of
//! `&&`-joined equality tests, bit `i` from the top against bit `i` from the
//! bottom for `i = 0, 1, ...`. The chain is generated by a macro over the 16
//! possible pair indices; clauses past `BITS / 2` fold away because `BITS` is
//! a const generic.

use super::{ByteReversalTable, PalindromeFn, Width};

/// Compares bit `i` from the top of a `bits`-wide window with bit `i` from the
/// bottom. Only valid for `i < bits / 2`.
#[inline(always)]
const fn pair_matches(value: u32, bits: u32, i: u32) -> bool {
    let high = 1u32 << (bits - 1 - i);
    let low = 1u32 << i;
    ((value & high) != 0) == ((value & low) != 0)
}

macro_rules! mirror_conjunction {
    ($value:expr, $bits:expr; $($i:literal)*) => {
        true $(&& ($i >= $bits / 2 || pair_matches($value, $bits, $i)))*
    };
}

/// Unrolled palindrome check over a compile-time width.
///
/// `is_palindrome_fixed::<8>` is the 4-pair form, `is_palindrome_fixed::<32>`
/// the 16-pair form.
#[inline(always)]
pub fn is_palindrome_fixed<const BITS: u32>(value: u32) -> bool {
    mirror_conjunction!(value, BITS; 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15)
}

/// Expands to a `match` on the width that names the `$f::<BITS>` instance
/// for every width `1..=32`.
macro_rules! by_width {
    (@arms $width:expr, $f:ident, $ty:ty; $($bits:literal)*) => {
        match $width.bits() {
            $($bits => $f::<$bits> as $ty,)*
            _ => $f::<32> as $ty,
        }
    };
    ($width:expr, $f:ident as $ty:ty) => {
        by_width!(@arms $width, $f, $ty;
            1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31)
    };
}

fn fixed_entry<const BITS: u32>(value: u32, _width: Width, _table: &ByteReversalTable) -> bool {
    is_palindrome_fixed::<BITS>(value)
}

/// Picks the unrolled instance for `width` once, so hot loops call a plain
/// function pointer instead of dispatching on every candidate.
pub fn for_width(width: Width) -> fn(u32) -> bool {
    by_width!(width, is_palindrome_fixed as fn(u32) -> bool)
}

/// Same selection as [`for_width`], in the uniform variant signature.
pub fn resolve(width: Width) -> PalindromeFn {
    by_width!(width, fixed_entry as PalindromeFn)
}
