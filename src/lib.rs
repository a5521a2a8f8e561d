//! Generator for the OpenCL `convert_*` built-in conversion functions.
//!
//! Hand-writing the conversion built-ins would mean thousands of
//! near-identical definitions: one per source type, destination type,
//! vector width, saturation variant and rounding mode. This crate instead
//! enumerates the whole combination space and prints one thin dispatcher
//! per combination, each delegating the numeric work to a shared
//! `__clc_convert_*` core primitive.
//!
//! The pieces are deliberately separate:
//!
//! * [`catalog`] holds the ordered type/width/suffix tables,
//! * [`guards`] decides which extension guard, if any, wraps a given
//!   source/destination pair,
//! * [`core_name`] names the core primitive a definition dispatches to,
//! * [`generate`] drives the deterministic enumeration and owns every
//!   byte of emitted text.
//!
//! The generator is a pure function of its configuration: same catalog and
//! resolvers, same output bytes.

pub mod catalog;
pub mod core_name;
pub mod generate;
pub mod guards;
