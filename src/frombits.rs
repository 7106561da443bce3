/// Marker for types that can be produced from raw bytes.
///
/// Implementing this trait asserts that *every* bit pattern of
/// `size_of::<Self>()` bytes is a valid value of the type. The conversion
/// functions never inspect the bytes they copy, so a field that looks like an
/// enum discriminant may well come back holding an out-of-range value; the
/// caller is trusted to have validated the layout beforehand.
///
/// All fixed-size numeric primitives implement this with `SCALAR = true`.
/// Composite value types opt in manually and should be `#[repr(C)]` so their
/// field layout is actually defined:
///
/// ```
/// #[derive(Clone, Copy)]
/// #[repr(C)]
/// struct Sample {
///     channel: u16,
///     level: f32,
/// }
///
/// unsafe impl spancast::FromBits for Sample {}
/// ```
///
/// # Safety
///
/// Implementors must guarantee that any `size_of::<Self>()` bytes form a
/// valid `Self`. Types with invalid bit patterns (`bool`, `char`, references,
/// enums with holes) must not implement this trait.
pub unsafe trait FromBits: Copy + 'static {
    /// `true` for scalar numerics, which the engine converts with plain
    /// bit copies; `false` (the default) for record types, which go through
    /// a layout-respecting structural copy.
    const SCALAR: bool = false;
}

macro_rules! from_bits_scalar {
    ($($name:ident),* $(,)?) => {
        $(
            unsafe impl FromBits for $name {
                const SCALAR: bool = true;
            }
        )*
    }
}

from_bits_scalar! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}
