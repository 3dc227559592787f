//! Conversions from raw C arguments.
//!
//! Bad arguments are caller bugs. Every helper here reports them and aborts
//! the process, just like a failed `assert`. Nothing unwinds into C.

use std::ffi::{c_char, c_int, CStr};
use std::fmt;
use std::{process, slice};

use coupling_mock::Result;

/// Reports a caller bug on stderr and aborts.
#[cold]
pub fn violation(message: fmt::Arguments<'_>) -> ! {
    log::error!("{message}");
    eprintln!("coupling-mock: {message}");
    process::abort()
}

/// Borrows a NUL-terminated UTF-8 string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
pub unsafe fn str_arg<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        violation(format_args!("null string argument"));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .unwrap_or_else(|_| violation(format_args!("string argument is not valid UTF-8")))
}

/// Converts a C element count.
pub fn count_arg(size: c_int) -> usize {
    usize::try_from(size).unwrap_or_else(|_| violation(format_args!("negative size argument: {size}")))
}

/// Borrows `len` elements starting at `ptr`.
///
/// # Safety
///
/// Unless `len` is zero, `ptr` must be valid for reads of `len` elements.
pub unsafe fn slice_arg<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        return &[];
    }
    if ptr.is_null() {
        violation(format_args!("null array argument"));
    }
    unsafe { slice::from_raw_parts(ptr, len) }
}

/// Mutably borrows `len` elements starting at `ptr`.
///
/// # Safety
///
/// Unless `len` is zero, `ptr` must be valid for writes of `len` elements
/// and not aliased for `'a`.
pub unsafe fn slice_out<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if len == 0 {
        return &mut [];
    }
    if ptr.is_null() {
        violation(format_args!("null output array argument"));
    }
    unsafe { slice::from_raw_parts_mut(ptr, len) }
}

/// Unwraps a fixture answer, aborting on contract violations.
pub fn expect_contract<T>(operation: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|err| violation(format_args!("{operation}: {err}")))
}

/// C truth value.
pub fn c_bool(value: bool) -> c_int {
    c_int::from(value)
}
