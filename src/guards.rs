//! Feature guards for conversions touching optional types.

use crate::catalog::{Feature, ScalarType};

/// Preprocessor guard wrapped around a single emitted function.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Guard {
    pub open: &'static str,
    pub close: &'static str,
}

/// Decides whether a (source, destination) pair needs a feature guard.
///
/// The resolver owns the feature-to-type mapping. The generator core only
/// opens and closes whatever it is handed, once per emitted function; it
/// never merges guards across adjacent emissions.
pub trait GuardResolver {
    fn guard(&self, src: &ScalarType, dst: &ScalarType) -> Option<Guard>;
}

/// The OpenCL extension guards: `cl_khr_fp16`, `cl_khr_fp64`, and the
/// embedded-profile `cles_khr_int64` rule.
pub struct ClcGuards;

impl GuardResolver for ClcGuards {
    fn guard(&self, src: &ScalarType, dst: &ScalarType) -> Option<Guard> {
        let mut fp16 = false;
        let mut fp64 = false;
        let mut int64 = false;
        for feature in [src.feature, dst.feature].into_iter().flatten() {
            match feature {
                Feature::Fp16 => fp16 = true,
                Feature::Fp64 => fp64 = true,
                Feature::Int64 => int64 = true,
            }
        }

        // Floating-point extensions take precedence: a double<->long pair
        // is already unavailable without cl_khr_fp64, which on the embedded
        // profile implies 64-bit integer support (see the preamble check).
        let open = if fp16 && fp64 {
            "#if defined(cl_khr_fp16) && defined(cl_khr_fp64)\n"
        } else if fp64 {
            "#ifdef cl_khr_fp64\n"
        } else if fp16 {
            "#if defined cl_khr_fp16\n"
        } else if int64 {
            "#if defined cles_khr_int64 || !defined(__EMBEDDED_PROFILE__)\n"
        } else {
            return None;
        };

        Some(Guard { open, close: "#endif\n" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INT: ScalarType = ScalarType::new("int", None);
    const LONG: ScalarType = ScalarType::new("long", Some(Feature::Int64));
    const HALF: ScalarType = ScalarType::new("half", Some(Feature::Fp16));
    const DOUBLE: ScalarType = ScalarType::new("double", Some(Feature::Fp64));

    #[test]
    fn plain_pairs_need_no_guard() {
        assert_eq!(ClcGuards.guard(&INT, &INT), None);
    }

    #[test]
    fn int64_guard_allows_full_profile() {
        let guard = ClcGuards.guard(&INT, &LONG).unwrap();
        assert_eq!(
            guard.open,
            "#if defined cles_khr_int64 || !defined(__EMBEDDED_PROFILE__)\n"
        );
        assert_eq!(guard.close, "#endif\n");
    }

    #[test]
    fn fp64_wins_over_int64() {
        let guard = ClcGuards.guard(&LONG, &DOUBLE).unwrap();
        assert_eq!(guard.open, "#ifdef cl_khr_fp64\n");
    }

    #[test]
    fn fp16_and_fp64_combine() {
        let guard = ClcGuards.guard(&HALF, &DOUBLE).unwrap();
        assert_eq!(guard.open, "#if defined(cl_khr_fp16) && defined(cl_khr_fp64)\n");
    }

    #[test]
    fn guard_is_symmetric_in_operands() {
        assert_eq!(ClcGuards.guard(&HALF, &INT), ClcGuards.guard(&INT, &HALF));
    }
}
