//! C ABI for coupling-mock-rs.
//!
//! Build this crate as a `cdylib` or `staticlib` and link it into a solver
//! test in place of the real coupling library's C bindings. It exports the
//! name-based `precicec_*` functions and forwards them to a single global
//! [`Participant`](coupling_mock::Participant).
//!
//! Contract violations (wrong vertex count, wrong mesh name, wrong bounding
//! box) are reported on stderr and abort the calling process like a failed C
//! `assert`. No panic ever unwinds across the C boundary.

// Exported symbols keep the C API's camelCase names
#![allow(non_snake_case)]
// The ABI necessarily deals in raw pointers
#![allow(unsafe_code)]
// Dimensions and counts are tiny; they always fit in a C int
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod abi;
mod args;
pub mod state;

pub use abi::*;
