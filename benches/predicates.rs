//! `cargo bench` target: times every palindrome predicate on random
//! candidates at the default width.

use binary_palindromes::bits::palindrome::bench::{run_benchmarks, write_report};
use binary_palindromes::bits::palindrome::Width;
use binary_palindromes::utils::bench::unit_name;
use std::io::{self, Write};

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];
const RUNS: usize = 30;
const SEED: u64 = 0x5EED_0B17;

fn main() -> binary_palindromes::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let width = Width::DEFAULT;

    writeln!(out, "Binary palindrome predicates ({}, {} bits)", unit_name(), width)?;
    for size in SIZES {
        writeln!(out)?;
        writeln!(out, "{} candidates, {} runs per variant", size, RUNS)?;
        let timings = run_benchmarks(width, size, RUNS, SEED);
        write_report(&timings, size, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
