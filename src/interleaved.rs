// src/interleaved.rs
//
// The public `Complex64`/flat-`f64` entry points described in spec §4.8.
// Both wrap the split-buffer transforms (`split::complex`, `split::real`)
// behind the unsafe pointer-reinterpretation trick the teacher crate uses
// in `float/real.rs::RealFft::process` to view a real buffer as a complex
// one, generalized here to go the other way: reinterpret an interleaved
// buffer as flat `f64`, then reuse the existing unzip/zip cycle tables
// (built for bit-reversal's even/odd split) to deinterleave it into the
// split representation the core transforms expect.

use crate::bitmath::ilog2_pow2;
use crate::common::FftError;
use crate::split::complex::fft_split;
use crate::split::real::{real_fft_split, MIN_HALF_LEN};
use crate::tables::Tables;
use core::ops::{BitOr, BitOrAssign};
use core::slice;
use num_complex::Complex64;

/// Controls the post-processing a transform does on top of the raw
/// butterfly/real-adapter math: whether the result is left deinterleaved
/// and whether the inverse direction is scaled back to the original
/// amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Leave the buffer in split (deinterleaved) form instead of
    /// re-interleaving it into `Complex64` pairs / natural sample order.
    pub const DO_NOT_REZIP: Flags = Flags(1);
    /// Skip the `1/n` inverse-direction scaling, leaving the raw
    /// unnormalized transform output.
    pub const DO_NOT_NORMALIZE: Flags = Flags(2);

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::NONE
    }
}

/// Reinterprets `buf` as a flat `f64` slice of length `2 * buf.len()`.
///
/// Safety: `Complex64` (`num_complex::Complex<f64>`) is `repr(C)` as two
/// adjacent `f64` fields, so a `Complex64` slice and a twice-as-long `f64`
/// slice over the same bytes have identical layout. This is the same
/// reasoning the teacher crate relies on to view `[f32]` as `[Complex32]`.
unsafe fn flatten(buf: &mut [Complex64]) -> &mut [f64] {
    unsafe { slice::from_raw_parts_mut(buf.as_mut_ptr() as *mut f64, buf.len() * 2) }
}

/// Runs the in-place complex FFT on an interleaved `Complex64` buffer.
pub fn fft_interleaved(
    buf: &mut [Complex64],
    forward: bool,
    flags: Flags,
    tables: &Tables,
) -> Result<(), FftError> {
    let n = buf.len();
    let l = tables.check_complex_depth(n)?;
    let flat_depth = l + 1;

    let flat = unsafe { flatten(buf) };
    tables.unzip(flat, flat_depth);
    let (re, im) = flat.split_at_mut(n);

    let normalize = if !forward && flags.contains(Flags::DO_NOT_NORMALIZE) {
        n as f64
    } else {
        1.0
    };
    fft_split(re, im, forward, normalize, tables)?;

    if !flags.contains(Flags::DO_NOT_REZIP) {
        tables.zip(flat, flat_depth);
    }
    Ok(())
}

/// Runs the real-input FFT adapter on a flat `f64` buffer of `n` real
/// samples, producing (or consuming, for the inverse direction) the
/// packed half-spectrum interleaved as `n/2` `Complex64` bins.
pub fn real_fft_interleaved(
    buf: &mut [f64],
    forward: bool,
    flags: Flags,
    tables: &Tables,
) -> Result<(), FftError> {
    let n = buf.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    let half_n = n / 2;
    if half_n < MIN_HALF_LEN {
        return Err(FftError::RealLengthTooSmall);
    }
    let depth = ilog2_pow2(n);
    if depth >= tables.dmax() {
        return Err(FftError::DepthExceeded);
    }

    if forward {
        tables.unzip(buf, depth);
        let (re, im) = buf.split_at_mut(half_n);
        real_fft_split(re, im, true, 1.0, tables)?;
        if !flags.contains(Flags::DO_NOT_REZIP) {
            tables.zip(buf, depth);
        }
    } else {
        if !flags.contains(Flags::DO_NOT_REZIP) {
            tables.unzip(buf, depth);
        }
        let normalize = if flags.contains(Flags::DO_NOT_NORMALIZE) {
            n as f64
        } else {
            1.0
        };
        let (re, im) = buf.split_at_mut(half_n);
        real_fft_split(re, im, false, normalize, tables)?;
        tables.zip(buf, depth);
    }
    Ok(())
}

#[cfg(test)]
#[path = "interleaved_tests.rs"]
mod tests;
