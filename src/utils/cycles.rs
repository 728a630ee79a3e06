//! CPU cycle counter used when the `cpu_cycles` feature is active.

/// Reads the cycle counter.
///
/// x86/x86_64: RDTSC fenced with LFENCE on both sides.
/// aarch64: CNTVCT_EL0, a fixed-frequency virtual timer readable from userspace.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_tsc()
    }

    #[cfg(target_arch = "x86")]
    {
        read_tsc()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cntvct()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64; build with --features use_time");
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
#[allow(unused_unsafe)]
fn read_tsc() -> u64 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{_mm_lfence, _rdtsc};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{_mm_lfence, _rdtsc};

    unsafe {
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cntvct() -> u64 {
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}
