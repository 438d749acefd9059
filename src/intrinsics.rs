//! Selection between the portable fallbacks and the hardware
//! bit-manipulation instructions.
//!
//! The choice is a build-target decision: code that must work with
//! intrinsics disabled uses [`Portable`] directly, everything else
//! goes through [`DefaultBitOps`]. Runtime CPU-feature detection is
//! the caller's concern.

use crate::{bits32, bits64};

/// The bit-manipulation operations that have both a hardware and a
/// portable implementation.
///
/// Both implementations define the all-zero input: `ctz(0)` and
/// `clz(0)` return the full bit width.
pub trait BitOps {
    /// Returns the number of trailing zero bits; 32 for zero.
    fn ctz32(x: u32) -> u32;
    /// Returns the number of leading zero bits; 32 for zero.
    fn clz32(x: u32) -> u32;
    /// Returns the number of set bits.
    fn popcount32(x: u32) -> u32;
    /// Parallel bit deposit; see [`bits32::pdep`].
    fn pdep32(x: u32, mask: u32) -> u32;
    /// Parallel bit extract; see [`bits32::pext`].
    fn pext32(x: u32, mask: u32) -> u32;

    /// Returns the number of trailing zero bits; 64 for zero.
    fn ctz64(x: u64) -> u32;
    /// Returns the number of leading zero bits; 64 for zero.
    fn clz64(x: u64) -> u32;
    /// Returns the number of set bits.
    fn popcount64(x: u64) -> u32;
    /// Parallel bit deposit; see [`bits64::pdep`].
    fn pdep64(x: u64, mask: u64) -> u64;
    /// Parallel bit extract; see [`bits64::pext`].
    fn pext64(x: u64, mask: u64) -> u64;
    /// Returns the full 128-bit product of `x` and `y` as `(lo, hi)`.
    fn widening_mul64(x: u64, y: u64) -> (u64, u64);
}

/// The portable implementations.
///
/// Always available and bit-for-bit equivalent to [`Native`],
/// whichever instructions the target has.
pub struct Portable;

impl BitOps for Portable {
    #[inline(always)]
    fn ctz32(x: u32) -> u32 {
        bits32::ctz(x)
    }

    #[inline(always)]
    fn clz32(x: u32) -> u32 {
        bits32::clz(x)
    }

    #[inline(always)]
    fn popcount32(x: u32) -> u32 {
        bits32::popcount(x)
    }

    #[inline(always)]
    fn pdep32(x: u32, mask: u32) -> u32 {
        bits32::pdep(x, mask)
    }

    #[inline(always)]
    fn pext32(x: u32, mask: u32) -> u32 {
        bits32::pext(x, mask)
    }

    #[inline(always)]
    fn ctz64(x: u64) -> u32 {
        bits64::ctz(x)
    }

    #[inline(always)]
    fn clz64(x: u64) -> u32 {
        bits64::clz(x)
    }

    #[inline(always)]
    fn popcount64(x: u64) -> u32 {
        bits64::popcount(x)
    }

    #[inline(always)]
    fn pdep64(x: u64, mask: u64) -> u64 {
        bits64::pdep(x, mask)
    }

    #[inline(always)]
    fn pext64(x: u64, mask: u64) -> u64 {
        bits64::pext(x, mask)
    }

    #[inline(always)]
    fn widening_mul64(x: u64, y: u64) -> (u64, u64) {
        bits64::widening_mul(x, y)
    }
}

/// The hardware implementations.
///
/// Bit scans and population counts lower to single instructions
/// where the target has them. `pdep`/`pext` use BMI2 when it is
/// statically enabled and otherwise fall back to the portable
/// routines, since there is no portable single-instruction form.
pub struct Native;

impl BitOps for Native {
    #[inline(always)]
    fn ctz32(x: u32) -> u32 {
        x.trailing_zeros()
    }

    #[inline(always)]
    fn clz32(x: u32) -> u32 {
        x.leading_zeros()
    }

    #[inline(always)]
    fn popcount32(x: u32) -> u32 {
        x.count_ones()
    }

    #[inline(always)]
    fn pdep32(x: u32, mask: u32) -> u32 {
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        // SAFETY: the cfg guarantees BMI2 is statically enabled.
        unsafe {
            core::arch::x86_64::_pdep_u32(x, mask)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
        {
            bits32::pdep(x, mask)
        }
    }

    #[inline(always)]
    fn pext32(x: u32, mask: u32) -> u32 {
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        // SAFETY: the cfg guarantees BMI2 is statically enabled.
        unsafe {
            core::arch::x86_64::_pext_u32(x, mask)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
        {
            bits32::pext(x, mask)
        }
    }

    #[inline(always)]
    fn ctz64(x: u64) -> u32 {
        x.trailing_zeros()
    }

    #[inline(always)]
    fn clz64(x: u64) -> u32 {
        x.leading_zeros()
    }

    #[inline(always)]
    fn popcount64(x: u64) -> u32 {
        x.count_ones()
    }

    #[inline(always)]
    fn pdep64(x: u64, mask: u64) -> u64 {
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        // SAFETY: the cfg guarantees BMI2 is statically enabled.
        unsafe {
            core::arch::x86_64::_pdep_u64(x, mask)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
        {
            bits64::pdep(x, mask)
        }
    }

    #[inline(always)]
    fn pext64(x: u64, mask: u64) -> u64 {
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        // SAFETY: the cfg guarantees BMI2 is statically enabled.
        unsafe {
            core::arch::x86_64::_pext_u64(x, mask)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
        {
            bits64::pext(x, mask)
        }
    }

    #[inline(always)]
    fn widening_mul64(x: u64, y: u64) -> (u64, u64) {
        let wide = u128::from(x) * u128::from(y);
        (wide as u64, (wide >> 64) as u64)
    }
}

/// The strategy for the current build target.
pub type DefaultBitOps = Native;
