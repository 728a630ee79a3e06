//! Byte-reversal lookup table and the predicates built on it.

use super::{PalindromeFn, Width};
use std::io::{self, Write};
use std::sync::OnceLock;

/// Reverses the bit order of a single byte.
pub const fn reverse_byte(byte: u8) -> u8 {
    let mut result = 0u8;
    let mut bit: u32 = 0;
    while bit < 8 {
        if byte & (1 << bit) != 0 {
            result |= 1 << (7 - bit);
        }
        bit += 1;
    }
    result
}

/// Maps every byte to its bit-reversed counterpart.
///
/// Immutable once built. Pass it by reference to the lookup predicates, or
/// use [`ByteReversalTable::global`] for the lazily built shared instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteReversalTable([u8; 256]);

impl ByteReversalTable {
    pub const fn new() -> Self {
        let mut entries = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            entries[i] = reverse_byte(i as u8);
            i += 1;
        }
        Self(entries)
    }

    /// Process-wide table, built on first use.
    pub fn global() -> &'static ByteReversalTable {
        static TABLE: OnceLock<ByteReversalTable> = OnceLock::new();
        TABLE.get_or_init(ByteReversalTable::new)
    }

    #[inline(always)]
    pub fn reverse(&self, byte: u8) -> u8 {
        self.0[byte as usize]
    }

    /// Reverses all 32 bits of `value` with four lookups.
    #[inline(always)]
    pub fn reverse_word(&self, value: u32) -> u32 {
        let [b3, b2, b1, b0] = value.to_be_bytes();
        u32::from_be_bytes([
            self.reverse(b0),
            self.reverse(b1),
            self.reverse(b2),
            self.reverse(b3),
        ])
    }

    /// Writes one `index reversed` line per entry, in hex.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, reversed) in self.0.iter().enumerate() {
            writeln!(out, "{:x} {:x}", i, reversed)?;
        }
        Ok(())
    }
}

impl Default for ByteReversalTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ByteReversalTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteReversalTable").finish_non_exhaustive()
    }
}

/// 16-bit window: the high byte must be the reversal of the low byte.
#[inline(always)]
pub fn is_palindrome_pattern16(value: u32, table: &ByteReversalTable) -> bool {
    let b1 = (value >> 8) as u8;
    let b0 = value as u8;
    b1 == table.reverse(b0)
}

/// 32-bit window: the outer bytes mirror each other, and so do the inner two.
#[inline(always)]
pub fn is_palindrome_pattern32(value: u32, table: &ByteReversalTable) -> bool {
    let [b3, b2, b1, b0] = value.to_be_bytes();
    b0 == table.reverse(b3) && b1 == table.reverse(b2)
}

fn pattern16_entry(value: u32, _width: Width, table: &ByteReversalTable) -> bool {
    is_palindrome_pattern16(value, table)
}

fn pattern32_entry(value: u32, _width: Width, table: &ByteReversalTable) -> bool {
    is_palindrome_pattern32(value, table)
}

/// Any width: reverse the whole word, then shift the window back down.
fn reversed_window_entry(value: u32, width: Width, table: &ByteReversalTable) -> bool {
    table.reverse_word(value) >> (u32::BITS - width.bits()) == value & width.mask()
}

/// Lookup predicate for `width`. Widths 16 and 32 get the byte-mirror forms.
pub fn resolve(width: Width) -> PalindromeFn {
    match width.bits() {
        16 => pattern16_entry as PalindromeFn,
        32 => pattern32_entry as PalindromeFn,
        _ => reversed_window_entry as PalindromeFn,
    }
}
