#[macro_use]
mod logging;

mod cast;
mod descriptor;
mod frombits;
mod raw;
mod wide;

pub use cast::{
    slice_as_bytes, value_as_bytes, value_from_bytes, value_from_bytes_at, vec_from_byte_vec,
    vec_from_bytes, CastError,
};
pub use descriptor::{descriptor, TypeDescriptor};
pub use frombits::FromBits;
pub use wide::{string_from_utf16, string_from_utf16_vec};
