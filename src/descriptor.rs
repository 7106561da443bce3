use std::any::TypeId;
use std::sync::OnceLock;

use dashmap::DashMap;

use crate::frombits::FromBits;

/// Memoized layout facts for one target type.
///
/// A descriptor is a pure function of the type: computed once on first use,
/// immutable afterwards, alive for the rest of the process.
#[derive(Debug)]
pub struct TypeDescriptor {
    /// Diagnostic name, as reported by `std::any::type_name`.
    pub type_name: &'static str,
    /// Exact footprint of one value under the platform layout rules,
    /// padding included.
    pub byte_size: usize,
    /// Whether values convert with plain bit copies or need a structural
    /// per-field copy.
    pub is_scalar: bool,
}

impl TypeDescriptor {
    fn of<T: FromBits>() -> TypeDescriptor {
        assert!(
            std::mem::size_of::<T>() > 0,
            "{} is zero-sized and has no byte representation",
            std::any::type_name::<T>()
        );
        TypeDescriptor {
            type_name: std::any::type_name::<T>(),
            byte_size: std::mem::size_of::<T>(),
            is_scalar: T::SCALAR,
        }
    }
}

static REGISTRY: OnceLock<DashMap<TypeId, &'static TypeDescriptor>> = OnceLock::new();

/// Returns the process-wide descriptor for `T`, computing it on first use.
///
/// Two threads racing on the first use of the same type may both compute the
/// descriptor; the registry keeps one winner and the results are identical
/// either way. Entries are never evicted, which is bounded by the number of
/// distinct target types a program actually converts.
pub fn descriptor<T: FromBits>() -> &'static TypeDescriptor {
    let registry = REGISTRY.get_or_init(DashMap::new);
    if let Some(found) = registry.get(&TypeId::of::<T>()) {
        return *found;
    }
    let computed: &'static TypeDescriptor = Box::leak(Box::new(TypeDescriptor::of::<T>()));
    trace!(
        "caching layout of {}: {} bytes, scalar: {}",
        computed.type_name,
        computed.byte_size,
        computed.is_scalar
    );
    *registry.entry(TypeId::of::<T>()).or_insert(computed)
}

#[cfg(test)]
mod descriptor_tests {
    use super::*;

    #[allow(dead_code)]
    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Header {
        tag: u16,
        len: u32,
    }

    unsafe impl FromBits for Header {}

    #[test]
    fn scalar_descriptor() {
        let layout = descriptor::<u32>();
        assert_eq!(4, layout.byte_size);
        assert!(layout.is_scalar);
    }

    #[test]
    fn repeated_lookups_return_the_same_descriptor() {
        let first = descriptor::<i64>() as *const TypeDescriptor;
        let second = descriptor::<i64>() as *const TypeDescriptor;
        assert_eq!(first, second);
    }

    #[test]
    fn record_descriptor_counts_padding() {
        let layout = descriptor::<Header>();
        assert_eq!(std::mem::size_of::<Header>(), layout.byte_size);
        assert!(layout.byte_size >= 6, "field sum is a lower bound");
        assert!(!layout.is_scalar);
    }
}
