//! Names of the shared `__clc_convert_*` core primitives.

use crate::catalog::ScalarType;

/// Resolves the core primitive implementing a conversion.
///
/// The generator treats the returned identifier as opaque text and calls
/// it with the declared parameter; the tuple-to-primitive mapping is
/// entirely this resolver's business.
pub trait CoreNameResolver {
    fn core_fn(&self, dst: &ScalarType, width: &str, sat: &str, mode: &str) -> String;
}

pub struct ClcCoreNames;

impl CoreNameResolver for ClcCoreNames {
    fn core_fn(&self, dst: &ScalarType, width: &str, sat: &str, mode: &str) -> String {
        format!("__clc_convert_{}{width}{sat}{mode}", dst.name)
    }
}
