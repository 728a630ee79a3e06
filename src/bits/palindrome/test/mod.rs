//! Verification and cross-variant tests for the palindrome predicates.

use super::code::{available_variants, is_palindrome_bitscan, ByteReversalTable, Width};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Widths up to this many bits are verified exhaustively.
const EXHAUSTIVE_MAX_BITS: u32 = 20;

/// Random samples checked above the exhaustive limit.
const SAMPLE_COUNT: usize = 1 << 16;

/// Builds a palindrome for `width` whose top half comes from `seed_bits`.
pub fn mirror_top_half(seed_bits: u32, width: Width) -> u32 {
    let bits = width.bits();
    let low_mask = (1u32 << (bits / 2)) - 1;
    let top = seed_bits & width.mask() & !low_mask;
    let reversed = top.reverse_bits() >> (u32::BITS - bits);
    top | (reversed & low_mask)
}

fn candidates_for(width: Width) -> Vec<u32> {
    if width.bits() <= EXHAUSTIVE_MAX_BITS {
        return (0..=width.mask()).collect();
    }

    let mut rng = StdRng::seed_from_u64(0x5EED_0B17);
    let mut values = vec![0, width.mask(), 1, 1 << (width.bits() - 1)];
    for _ in 0..SAMPLE_COUNT {
        let raw: u32 = rng.random();
        values.push(raw & width.mask());
        values.push(mirror_top_half(raw, width));
    }
    values
}

/// Verify all variants produce the same results as the bit scan
pub fn verify_all(width: Width) -> Result<(), String> {
    let table = ByteReversalTable::global();
    let candidates = candidates_for(width);

    for variant in available_variants() {
        if variant.name == "original" {
            continue;
        }

        let is_palindrome = (variant.function)(width);
        for &value in &candidates {
            let expected = is_palindrome_bitscan(value, width);
            let actual = is_palindrome(value, width, table);

            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for value {:#x} at {} bits: expected {}, got {}",
                    variant.name, value, width, expected, actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::palindrome::code::{DEFAULT_BITS, MAX_BITS};

    fn width(bits: u32) -> Width {
        Width::new(bits).unwrap()
    }

    #[test]
    fn test_all_variants_agree_exhaustively() {
        for bits in 1..=16 {
            verify_all(width(bits)).expect("All variants should agree");
        }
    }

    #[test]
    fn test_all_variants_agree_wide() {
        for bits in [24, DEFAULT_BITS, 31, MAX_BITS] {
            verify_all(width(bits)).expect("All variants should agree");
        }
    }

    #[test]
    fn test_zero_and_all_ones() {
        let table = ByteReversalTable::new();
        for bits in 1..=MAX_BITS {
            let w = width(bits);
            for variant in available_variants() {
                assert!(
                    (variant.function)(w)(0, w, &table),
                    "{}: 0 should be a palindrome at {} bits",
                    variant.name,
                    bits
                );
                assert!(
                    (variant.function)(w)(w.mask(), w, &table),
                    "{}: all ones should be a palindrome at {} bits",
                    variant.name,
                    bits
                );
            }
        }
    }

    #[test]
    fn test_eight_bit_boundaries() {
        let table = ByteReversalTable::new();
        let w = width(8);
        for variant in available_variants() {
            assert!((variant.function)(w)(0x81, w, &table), "{}: 0x81", variant.name);
            assert!(!(variant.function)(w)(0x80, w, &table), "{}: 0x80", variant.name);
        }
    }

    #[test]
    fn test_sixteen_bit_boundaries() {
        let table = ByteReversalTable::new();
        let w = width(16);
        for variant in available_variants() {
            assert!((variant.function)(w)(0x8001, w, &table), "{}: 0x8001", variant.name);
            assert!(!(variant.function)(w)(0x0001, w, &table), "{}: 0x0001", variant.name);
        }
    }

    #[test]
    fn test_bits_above_width_are_ignored() {
        let table = ByteReversalTable::new();
        let w = width(8);
        for variant in available_variants() {
            assert!((variant.function)(w)(0xF00_81, w, &table), "{}", variant.name);
            assert!(!(variant.function)(w)(0xF00_80, w, &table), "{}", variant.name);
        }
    }

    #[test]
    fn test_mirror_top_half_builds_palindromes() {
        let mut rng = StdRng::seed_from_u64(7);
        for bits in 1..=MAX_BITS {
            let w = width(bits);
            for _ in 0..64 {
                let value = mirror_top_half(rng.random(), w);
                assert!(value <= w.mask());
                assert!(is_palindrome_bitscan(value, w), "{:#x} at {} bits", value, bits);
            }
        }
    }

    #[test]
    fn test_palindrome_count_per_width() {
        for bits in 1..=16 {
            let w = width(bits);
            let count = (0..=w.mask())
                .filter(|&v| is_palindrome_bitscan(v, w))
                .count() as u64;
            assert_eq!(count, w.expected_palindromes(), "{} bits", bits);
        }
    }
}
