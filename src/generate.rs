//! The enumeration loop and text emission.

use std::io::{self, Write};

use itertools::iproduct;

use crate::catalog::{Catalog, ScalarType};
use crate::core_name::CoreNameResolver;
use crate::guards::GuardResolver;

/// Fixed header: autogeneration banner, license, includes, and the
/// extension-enable pragma blocks. The `#error` inside the fp64 block is
/// evaluated by the downstream OpenCL compiler, never by this tool: an
/// embedded profile advertising cl_khr_fp64 must also advertise
/// cles_khr_int64, and a build where that does not hold has inconsistent
/// capability data.
pub const PREAMBLE: &str = r#"/* !!!! AUTOGENERATED FILE generated by gen-convert !!!!!

   DON'T CHANGE THIS FILE. MAKE YOUR CHANGES TO gen-convert AND RUN:
   $ gen-convert > convert-clc.cl

   OpenCL type conversion functions

   Copyright (c) 2013 Victor Oliveira <victormatheus@gmail.com>
   Copyright (c) 2013 Jesse Towner <jessetowner@lavabit.com>

   Permission is hereby granted, free of charge, to any person obtaining a copy
   of this software and associated documentation files (the "Software"), to deal
   in the Software without restriction, including without limitation the rights
   to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
   copies of the Software, and to permit persons to whom the Software is
   furnished to do so, subject to the following conditions:

   The above copyright notice and this permission notice shall be included in
   all copies or substantial portions of the Software.

   THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
   IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
   FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
   AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
   LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
   OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
   THE SOFTWARE.
*/

#include <clc/clc.h>
#include <core/clc_core.h>

#ifdef cl_khr_fp16
#pragma OPENCL EXTENSION cl_khr_fp16 : enable
#endif

#ifdef cl_khr_fp64
#pragma OPENCL EXTENSION cl_khr_fp64 : enable

#if defined(__EMBEDDED_PROFILE__) && !defined(cles_khr_int64)
#error Embedded profile that supports cl_khr_fp64 also has to support cles_khr_int64
#endif

#endif

#ifdef cles_khr_int64
#pragma OPENCL EXTENSION cles_khr_int64 : enable
#endif

"#;

/// The full identity of one function to emit.
#[derive(Clone, Copy, Debug)]
pub struct ConversionSpec<'a> {
    pub src: &'a ScalarType,
    pub dst: &'a ScalarType,
    pub width: &'a str,
    pub sat: &'a str,
    /// Empty for the unspecified (default) rounding mode.
    pub mode: &'a str,
}

/// Renders one `convert_*` definition: a thin dispatcher to the given core
/// primitive. All formatting of the emitted function lives here.
pub fn conversion_text(spec: ConversionSpec<'_>, core_fn: &str) -> String {
    let ConversionSpec { src, dst, width, sat, mode } = spec;
    format!(
        "_CLC_DEF _CLC_OVERLOAD\n\
         {dst}{width} convert_{dst}{width}{sat}{mode}({src}{width} x)\n\
         {{\n  return {core_fn}(x);\n}}\n\n",
        dst = dst.name,
        src = src.name,
    )
}

/// Emits the complete conversion-function source: the fixed preamble, then
/// one definition per (source, destination, width, saturation, rounding)
/// combination, in exactly that loop order.
///
/// Output depends only on the catalog and the two resolvers, so two runs
/// over the same configuration produce identical bytes. The loop is total:
/// it never skips a combination, not even source == destination. Whether a
/// combination is usable on a given target is expressed through guard text
/// alone.
pub struct Generator<G, N> {
    catalog: Catalog,
    guards: G,
    core_names: N,
}

impl<G: GuardResolver, N: CoreNameResolver> Generator<G, N> {
    pub fn new(catalog: Catalog, guards: G, core_names: N) -> Generator<G, N> {
        Generator { catalog, guards, core_names }
    }

    /// Writes the preamble and every conversion function, returning the
    /// number of definitions emitted.
    pub fn write<W: Write>(&self, dest: &mut W) -> io::Result<usize> {
        dest.write_all(PREAMBLE.as_bytes())?;

        let mut emitted = 0;
        for (src, dst, width, sat) in iproduct!(
            &self.catalog.scalar_types,
            &self.catalog.scalar_types,
            &self.catalog.vector_widths,
            &self.catalog.saturation
        ) {
            // The unspecified rounding mode always precedes the explicit
            // ones for a given combination.
            self.write_conversion(dest, ConversionSpec { src, dst, width, sat, mode: "" })?;
            emitted += 1;
            for mode in &self.catalog.rounding_modes {
                self.write_conversion(dest, ConversionSpec { src, dst, width, sat, mode })?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }

    /// One definition, wrapped in its own guard when the type pair needs
    /// one. One open/close pair per emission, even when neighbours share
    /// the same guard.
    fn write_conversion<W: Write>(&self, dest: &mut W, spec: ConversionSpec<'_>) -> io::Result<()> {
        let guard = self.guards.guard(spec.src, spec.dst);
        if let Some(guard) = &guard {
            dest.write_all(guard.open.as_bytes())?;
        }
        let core_fn = self.core_names.core_fn(spec.dst, spec.width, spec.sat, spec.mode);
        dest.write_all(conversion_text(spec, &core_fn).as_bytes())?;
        if let Some(guard) = &guard {
            dest.write_all(guard.close.as_bytes())?;
        }
        Ok(())
    }
}
