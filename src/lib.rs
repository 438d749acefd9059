//! `rbits` is a pure Rust, no-std library of portable bit-manipulation
//! primitives for 32-bit and 64-bit unsigned integers: decimal digit
//! counting, bit scans (count leading/trailing zeros), population
//! count, full double-width multiplication, and parallel bit
//! deposit/extract (the BMI2 `pdep`/`pext` instructions).
//!
//! Every operation is a total, allocation-free `const fn` defined for
//! the entire input domain, including the all-zero input that some
//! hardware bit-scan instructions leave undefined: here `ctz(0)` and
//! `clz(0)` return the full bit width.
//!
//! The per-width modules [`bits32`] and [`bits64`] contain the
//! portable implementations, which use only ordinary integer
//! arithmetic and are exact drop-in replacements for the corresponding
//! hardware instructions. The [`intrinsics`] module selects between
//! those fallbacks and the hardware paths.
//!
//! # Cargo Features
//!
//! - `std`: Include [`std`] support. This is currently unused, but may
//! be used in the future.
//!
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::string_slice)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

pub mod bits32;
pub mod bits64;
pub mod intrinsics;
mod util;

#[doc(inline)]
pub use intrinsics::{BitOps, DefaultBitOps, Native, Portable};
