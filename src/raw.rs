//! Raw reinterpretation primitives the rest of the crate is built on.
//!
//! Everything here trusts the caller completely. There are no bounds checks
//! outside of debug builds and no alignment checks beyond what each function
//! documents; misuse is undefined behavior, not an error.

use std::mem::MaybeUninit;

/// Reads a `T` from the start of `bytes` with a single unaligned load.
///
/// # Safety
///
/// `bytes` must hold at least `size_of::<T>()` bytes, and every bit pattern
/// of that size must be a valid `T`.
#[inline(always)]
pub unsafe fn read_scalar<T>(bytes: &[u8]) -> T {
    debug_assert!(
        bytes.len() >= std::mem::size_of::<T>(),
        "read_scalar: buffer shorter than target type"
    );
    std::ptr::read_unaligned(bytes.as_ptr() as *const T)
}

/// Copies `size_of::<T>()` bytes starting at `offset` into properly aligned
/// storage, so fields land where the declared `#[repr(C)]` layout puts them.
///
/// # Safety
///
/// `offset + size_of::<T>()` must not exceed `bytes.len()`, and every bit
/// pattern must be a valid `T`.
#[inline(always)]
pub unsafe fn read_record<T>(bytes: &[u8], offset: usize) -> T {
    debug_assert!(
        offset + std::mem::size_of::<T>() <= bytes.len(),
        "read_record: window past end of buffer"
    );
    let mut value = MaybeUninit::<T>::uninit();
    std::ptr::copy_nonoverlapping(
        bytes.as_ptr().add(offset),
        value.as_mut_ptr() as *mut u8,
        std::mem::size_of::<T>(),
    );
    value.assume_init()
}

/// Views a value as its underlying bytes.
///
/// # Safety
///
/// The returned slice exposes padding bytes of composite types exactly as
/// they sit in memory.
#[inline(always)]
pub unsafe fn value_as_bytes<T>(value: &T) -> &[u8] {
    std::slice::from_raw_parts(value as *const T as *const u8, std::mem::size_of::<T>())
}

/// Views a slice of values as one contiguous byte slice.
///
/// # Safety
///
/// Same caveat as [`value_as_bytes`] regarding padding bytes.
#[inline(always)]
pub unsafe fn slice_as_bytes_unchecked<T>(values: &[T]) -> &[u8] {
    std::slice::from_raw_parts(
        values.as_ptr() as *const u8,
        values.len() * std::mem::size_of::<T>(),
    )
}
