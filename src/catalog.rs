//! The type and mode tables the generator enumerates.
//!
//! Everything here is inert, ordered configuration: the scalar types
//! eligible for conversion, the vector widths, and the saturation and
//! rounding-mode suffixes. The generator takes a [`Catalog`] at
//! construction time, so tests can drive it with synthetic tables.

/// Optional capability a scalar type depends on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Feature {
    /// `cl_khr_fp16`.
    Fp16,
    /// `cl_khr_fp64`.
    Fp64,
    /// 64-bit integers, optional only in the embedded profile
    /// (`cles_khr_int64`).
    Int64,
}

/// A scalar type eligible for conversion, e.g. `uchar` or `float`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScalarType {
    pub name: &'static str,
    pub feature: Option<Feature>,
}

impl ScalarType {
    pub const fn new(name: &'static str, feature: Option<Feature>) -> ScalarType {
        ScalarType { name, feature }
    }
}

/// Ordered tables driving the enumeration. Iteration order here is output
/// order, so the lists must stay stable.
pub struct Catalog {
    pub scalar_types: Vec<ScalarType>,
    /// Vector width suffixes; `""` is the scalar width.
    pub vector_widths: Vec<&'static str>,
    /// `""` (non-saturating) or `"_sat"`.
    pub saturation: Vec<&'static str>,
    /// Explicit rounding-mode suffixes. The unspecified (default) mode is
    /// not listed; the generator always emits it first on its own.
    pub rounding_modes: Vec<&'static str>,
}

impl Catalog {
    /// The OpenCL 1.2 table. `schar` is part of the raw type list shared
    /// with the core-primitive library, but the `convert_*` built-ins are
    /// only defined for the OpenCL type names, so it is dropped here.
    pub fn opencl() -> Catalog {
        let mut scalar_types = vec![
            ScalarType::new("char", None),
            ScalarType::new("schar", None),
            ScalarType::new("uchar", None),
            ScalarType::new("short", None),
            ScalarType::new("ushort", None),
            ScalarType::new("int", None),
            ScalarType::new("uint", None),
            ScalarType::new("long", Some(Feature::Int64)),
            ScalarType::new("ulong", Some(Feature::Int64)),
            ScalarType::new("half", Some(Feature::Fp16)),
            ScalarType::new("float", None),
            ScalarType::new("double", Some(Feature::Fp64)),
        ];
        scalar_types.retain(|ty| ty.name != "schar");

        Catalog {
            scalar_types,
            vector_widths: vec!["", "2", "3", "4", "8", "16"],
            saturation: vec!["", "_sat"],
            rounding_modes: vec!["_rte", "_rtz", "_rtp", "_rtn"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schar_is_excluded() {
        let catalog = Catalog::opencl();
        assert!(catalog.scalar_types.iter().all(|ty| ty.name != "schar"));
        assert_eq!(catalog.scalar_types.len(), 11);
    }

    #[test]
    fn type_names_are_unique() {
        let catalog = Catalog::opencl();
        let mut names: Vec<_> = catalog.scalar_types.iter().map(|ty| ty.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.scalar_types.len());
    }

    #[test]
    fn scalar_width_comes_first() {
        let catalog = Catalog::opencl();
        assert_eq!(catalog.vector_widths[0], "");
        assert_eq!(catalog.saturation[0], "");
    }
}
