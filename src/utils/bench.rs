//! Measurement primitives for the palindrome benchmarks.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================

/// Raw measurement: cycle count, or elapsed `Duration` on wall-clock builds.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Instant = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Instant = std::time::Instant;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Instant {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Instant {
    std::time::Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Measurement as a plain integer in [`unit_name`] units.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_units(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_units(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64", target_arch = "x86")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Formats a value already converted with [`to_units`].
pub fn format_units(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}G {}", value / 1e9, unit_name())
    } else if value >= 1e6 {
        format!("{:.2}M {}", value / 1e6, unit_name())
    } else if value >= 1e4 {
        format!("{:.1}k {}", value / 1e3, unit_name())
    } else {
        format!("{:.0} {}", value, unit_name())
    }
}

/// Times an expression, returning `(measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $body;
        ($crate::utils::bench::elapsed(start), result)
    }};
}

/// Shuffle with a seeded generator so schedules can be replayed.
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}
