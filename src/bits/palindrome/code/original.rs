//! Bit-by-bit scan, the reference implementation.
//!
//! Two masks walk inward over the window: one starts at the most significant
//! bit of the width and shifts right, the other starts at bit 0 and shifts
//! left. Every pair they select must agree.

use super::Width;

/// Returns `true` if the low `width` bits of `value` read the same in both
/// directions. Bits above the width are ignored.
///
/// The loop runs until the top mask falls off the bottom, so every pair is
/// compared twice. That is the behaviour the other variants are checked
/// against, not a quantity to optimize here.
#[inline(never)]
pub fn is_palindrome_bitscan(value: u32, width: Width) -> bool {
    let mut left_mask: u32 = 1 << (width.bits() - 1);
    let mut right_mask: u32 = 1;

    while left_mask != 0 {
        if ((value & left_mask) != 0) != ((value & right_mask) != 0) {
            return false;
        }
        left_mask >>= 1;
        right_mask <<= 1;
    }
    true
}
