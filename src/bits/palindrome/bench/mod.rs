//! Benchmarks for the palindrome predicates on random candidates.

use super::code::{available_variants, ByteReversalTable, PalindromeFn, Width};
use crate::utils::bench::{format_units, shuffle, to_units};
use crate::utils::C_COMPILER_NAME;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::io::{self, Write};

/// Candidates run through every predicate before timing starts.
const WARMUP_CANDIDATES: usize = 100;

/// Random candidates in `[0, 2^width)`.
pub fn generate_candidates(size: usize, width: Width, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<u32>() & width.mask()).collect()
}

/// Timed passes of one variant over the same candidates.
#[derive(Debug, Clone)]
pub struct VariantTiming {
    pub name: &'static str,
    pub description: &'static str,
    /// One entry per pass, in `unit_name()` units.
    pub samples: Vec<u64>,
    /// Palindromes among the candidates.
    pub matches: u64,
}

impl VariantTiming {
    pub fn min(&self) -> u64 {
        self.samples.iter().copied().min().unwrap_or(0)
    }

    pub fn median(&self) -> u64 {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        match sorted.len() {
            0 => 0,
            n if n % 2 == 0 => (sorted[n / 2 - 1] + sorted[n / 2]) / 2,
            n => sorted[n / 2],
        }
    }
}

#[inline(never)]
fn count_matches(
    candidates: &[u32],
    is_palindrome: PalindromeFn,
    width: Width,
    table: &ByteReversalTable,
) -> u64 {
    let mut count = 0u64;
    for &value in candidates {
        if is_palindrome(black_box(value), width, table) {
            count += 1;
        }
    }
    black_box(count)
}

/// Times every available variant `runs` times over `size` seeded candidates.
///
/// Each variant's predicate is resolved for `width` before any pass, so every
/// variant pays the same single indirect call per candidate. Passes of all
/// variants are interleaved in a seeded random order.
pub fn run_benchmarks(width: Width, size: usize, runs: usize, seed: u64) -> Vec<VariantTiming> {
    let candidates = generate_candidates(size, width, seed);
    let table = ByteReversalTable::global();
    let variants = available_variants();
    let predicates: Vec<PalindromeFn> = variants.iter().map(|v| (v.function)(width)).collect();

    for &is_palindrome in &predicates {
        let warmup = &candidates[..candidates.len().min(WARMUP_CANDIDATES)];
        count_matches(warmup, is_palindrome, width, table);
    }

    let mut timings: Vec<VariantTiming> = variants
        .iter()
        .map(|v| VariantTiming {
            name: v.name,
            description: v.description,
            samples: Vec::with_capacity(runs),
            matches: 0,
        })
        .collect();

    let mut schedule: Vec<usize> = (0..runs).flat_map(|_| 0..predicates.len()).collect();
    shuffle(&mut schedule, seed);

    for index in schedule {
        let (elapsed, matches) =
            crate::measure!(count_matches(&candidates, predicates[index], width, table));
        timings[index].samples.push(to_units(elapsed));
        timings[index].matches = matches;
    }

    timings
}

/// One line per variant: name, min and median per pass, median per candidate.
pub fn write_report<W: Write>(timings: &[VariantTiming], size: usize, out: &mut W) -> io::Result<()> {
    for timing in timings {
        let median = timing.median();
        let per_candidate = median as f64 / size.max(1) as f64;
        let compiler = match (timing.name.starts_with("c-"), C_COMPILER_NAME) {
            (true, Some(name)) => format!(" [{}]", name),
            _ => String::new(),
        };
        writeln!(
            out,
            "  {:<10} min {:>14}  median {:>14}  {:>10.2}/candidate  {} matches  {}{}",
            timing.name,
            format_units(timing.min() as f64),
            format_units(median as f64),
            per_candidate,
            timing.matches,
            timing.description,
            compiler
        )?;
    }
    Ok(())
}
