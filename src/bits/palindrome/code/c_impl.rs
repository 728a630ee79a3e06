//! FFI bindings for the C bit-scan variant. Only compiled when `build.rs`
//! built `c_impl.c`.

use super::Width;

mod ffi {
    extern "C" {
        pub fn palindrome_bitscan_c(value: u32, width: u32) -> std::os::raw::c_int;
    }
}

/// C bit scan, same contract as the Rust reference.
#[inline(never)]
pub fn is_palindrome_c_bitscan(value: u32, width: Width) -> bool {
    unsafe { ffi::palindrome_bitscan_c(value, width.bits()) != 0 }
}
