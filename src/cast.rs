use std::fmt::Display;

use crate::descriptor::descriptor;
use crate::frombits::FromBits;
use crate::raw;

/// Error raised by the checked bulk conversion paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// The input length does not divide evenly into elements of the target
    /// type, so a conversion would leave a partial trailing element.
    SizeMismatch {
        type_name: &'static str,
        element_size: usize,
        byte_len: usize,
    },
}

impl Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastError::SizeMismatch { type_name, element_size, byte_len } => write!(
                f,
                "byte length {} is not a multiple of {}, the size of {}",
                byte_len, element_size, type_name
            ),
        }
    }
}

impl std::error::Error for CastError {}

/// Reinterprets the start of `bytes` as a single `T`.
///
/// Scalar types are read with one unaligned load, so `bytes` may start at
/// any address. Record types are copied byte-wise into aligned storage
/// following their declared `#[repr(C)]` layout.
///
/// # Safety
///
/// `bytes` must hold at least `size_of::<T>()` bytes. The length is not
/// checked outside of debug builds; reading past the end is undefined
/// behavior, not a recoverable error.
#[inline]
pub unsafe fn value_from_bytes<T: FromBits>(bytes: &[u8]) -> T {
    if T::SCALAR {
        raw::read_scalar(bytes)
    } else {
        raw::read_record(bytes, 0)
    }
}

/// Reinterprets `size_of::<T>()` bytes of `bytes` starting at `offset` as a
/// single `T`.
///
/// # Safety
///
/// `offset + size_of::<T>()` must not exceed `bytes.len()`; see
/// [`value_from_bytes`].
#[inline]
pub unsafe fn value_from_bytes_at<T: FromBits>(bytes: &[u8], offset: usize) -> T {
    raw::read_record(bytes, offset)
}

/// Reinterprets `bytes` as a vector of `T`, copying the input.
///
/// The input length must be an exact multiple of `size_of::<T>()`; empty
/// input yields an empty vector. Scalar types convert with one contiguous
/// copy of the whole span, record types element-by-element at successive
/// offsets.
pub fn vec_from_bytes<T: FromBits>(bytes: &[u8]) -> Result<Vec<T>, CastError> {
    let layout = descriptor::<T>();
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    if bytes.len() % layout.byte_size != 0 {
        return Err(CastError::SizeMismatch {
            type_name: layout.type_name,
            element_size: layout.byte_size,
            byte_len: bytes.len(),
        });
    }
    let count = bytes.len() / layout.byte_size;
    let mut values = Vec::with_capacity(count);
    if layout.is_scalar {
        // One bit copy for the whole run; the Vec's own storage satisfies
        // the element alignment.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), values.as_mut_ptr() as *mut u8, bytes.len());
            values.set_len(count);
        }
    } else {
        for index in 0..count {
            values.push(unsafe { raw::read_record::<T>(bytes, index * layout.byte_size) });
        }
    }
    Ok(values)
}

/// Reinterprets `bytes` as a vector of `T`, consuming the input.
///
/// For scalar `T` the source allocation is reused as the result's backing
/// storage when its pointer meets `T`'s alignment and its capacity divides
/// evenly into elements; `T = u8` always qualifies and comes back as the
/// same allocation untouched. In every other case, and always for record
/// types, the elements are copied out and the source is dropped.
///
/// Element-wise, the result is identical to what [`vec_from_bytes`] returns
/// for the same input; only the fate of the source storage differs.
pub fn vec_from_byte_vec<T: FromBits>(mut bytes: Vec<u8>) -> Result<Vec<T>, CastError> {
    let layout = descriptor::<T>();
    if bytes.len() % layout.byte_size != 0 {
        return Err(CastError::SizeMismatch {
            type_name: layout.type_name,
            element_size: layout.byte_size,
            byte_len: bytes.len(),
        });
    }
    if layout.is_scalar
        && bytes.as_ptr() as usize % std::mem::align_of::<T>() == 0
        && bytes.capacity() % layout.byte_size == 0
    {
        let len = bytes.len() / layout.byte_size;
        let capacity = bytes.capacity() / layout.byte_size;
        let ptr = bytes.as_mut_ptr() as *mut T;
        std::mem::forget(bytes);
        return Ok(unsafe { Vec::from_raw_parts(ptr, len, capacity) });
    }
    debug!("source storage of {} bytes not reusable for {}, copying", bytes.len(), layout.type_name);
    vec_from_bytes(&bytes)
}

/// Views a slice of `T` as its underlying bytes, the inverse of
/// [`vec_from_bytes`].
///
/// For record types the result includes padding bytes exactly as they sit
/// in memory.
pub fn slice_as_bytes<T: FromBits>(values: &[T]) -> &[u8] {
    unsafe { raw::slice_as_bytes_unchecked(values) }
}

/// Views a single value as its underlying bytes, the inverse of
/// [`value_from_bytes`]. Same padding caveat as [`slice_as_bytes`].
pub fn value_as_bytes<T: FromBits>(value: &T) -> &[u8] {
    unsafe { raw::value_as_bytes(value) }
}
