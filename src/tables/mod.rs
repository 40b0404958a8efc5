// src/tables/mod.rs
//
// Bundles the four table families (bit-reversal swap pairs, unzip/zip
// cycles, twiddle factors) built once and shared immutably by every
// transform call, per spec §3/§4.9/§5.

mod bitrev;
mod cycles;
mod twiddle;

pub(crate) use cycles::apply_cycles;

use crate::bitmath::ilog2_pow2;
use crate::common::FftError;
use alloc::vec::Vec;

/// The full set of precomputed tables for depths `0..=MAX_TABLE_DEPTH`.
///
/// Immutable once built; safe to share across threads (`Tables: Sync`)
/// because nothing in it is ever mutated after [`Tables::build`] returns.
pub struct Tables {
    dmax: u32,
    swap_pairs: Vec<Vec<(u32, u32)>>,
    unzip_cycles: Vec<Vec<Vec<u32>>>,
    zip_cycles: Vec<Vec<Vec<u32>>>,
    cos: Vec<Vec<f64>>,
    sin: Vec<Vec<f64>>,
    sin_inv: Vec<Vec<f64>>,
}

impl Tables {
    /// Builds every table for depths up to (but not including) `dmax`
    /// (bit-reversal/twiddle tables), and up to and including `dmax` for the
    /// unzip/zip cycle tables, per spec §3.
    pub fn build(dmax: u32) -> Self {
        let twiddles = twiddle::build_twiddle_tables(dmax);
        Tables {
            dmax,
            swap_pairs: bitrev::build_bit_reversal_tables(dmax),
            unzip_cycles: cycles::build_unzip_cycle_tables(dmax),
            zip_cycles: cycles::build_zip_cycle_tables(dmax),
            cos: twiddles.cos,
            sin: twiddles.sin,
            sin_inv: twiddles.sin_inv,
        }
    }

    /// Builds the default-depth table set (`MAX_TABLE_DEPTH`).
    pub fn new() -> Self {
        Self::build(crate::MAX_TABLE_DEPTH)
    }

    pub(crate) fn dmax(&self) -> u32 {
        self.dmax
    }

    pub(crate) fn cos(&self, depth: u32) -> &[f64] {
        &self.cos[depth as usize]
    }

    pub(crate) fn sin(&self, depth: u32) -> &[f64] {
        &self.sin[depth as usize]
    }

    pub(crate) fn sin_inv(&self, depth: u32) -> &[f64] {
        &self.sin_inv[depth as usize]
    }

    pub(crate) fn swap_pairs(&self, depth: u32) -> &[(u32, u32)] {
        &self.swap_pairs[depth as usize]
    }

    pub(crate) fn unzip_cycles(&self, depth: u32) -> &[Vec<u32>] {
        &self.unzip_cycles[depth as usize]
    }

    pub(crate) fn zip_cycles(&self, depth: u32) -> &[Vec<u32>] {
        &self.zip_cycles[depth as usize]
    }

    /// Checks that a complex FFT of length `n` fits within this table set,
    /// returning the depth `L` with `2^L == n`.
    pub(crate) fn check_complex_depth(&self, n: usize) -> Result<u32, FftError> {
        if !n.is_power_of_two() || n == 0 {
            return Err(FftError::NotPowerOfTwo);
        }
        let l = ilog2_pow2(n);
        if l + 1 >= self.dmax {
            return Err(FftError::DepthExceeded);
        }
        Ok(l)
    }

    /// Unzips `buf` (length `2^depth`) in place using this table's
    /// `unzip_cycles[depth]`.
    pub(crate) fn unzip(&self, buf: &mut [f64], depth: u32) {
        apply_cycles(buf, self.unzip_cycles(depth));
    }

    /// Zips `buf` (length `2^depth`) in place using this table's
    /// `zip_cycles[depth]`. Inverse of [`Tables::unzip`].
    pub(crate) fn zip(&self, buf: &mut [f64], depth: u32) {
        apply_cycles(buf, self.zip_cycles(depth));
    }

    /// Bit-reverses the split pair `(r, i)`, both of length `2^depth`, using
    /// this table's `swap_pairs[depth]`.
    pub(crate) fn bit_reverse_split(&self, r: &mut [f64], i: &mut [f64], depth: u32) {
        for &(a, b) in self.swap_pairs(depth) {
            r.swap(a as usize, b as usize);
            i.swap(a as usize, b as usize);
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
mod global {
    use super::Tables;
    use crate::common::FftError;
    use once_cell::sync::OnceCell;

    static TABLES: OnceCell<Tables> = OnceCell::new();

    /// Builds the process-wide table singleton. Idempotent: a call that
    /// loses a race against a concurrent first call is a silent no-op.
    ///
    /// Must be called before [`get`] returns `Ok`; see spec §4.9.
    pub fn initialize() {
        let _ = TABLES.set(Tables::new());
    }

    /// Returns the process-wide table singleton built by [`initialize`],
    /// or `Uninitialized` if `initialize()` has not yet completed.
    ///
    /// This is the std-feature convenience accessor for callers who would
    /// rather not thread a `&Tables` through their own state: call
    /// `initialize()` once at startup, then pass `get_global()?` into
    /// `fft_split`/`fft_interleaved`/etc. wherever those would otherwise
    /// take a locally-built `Tables`.
    pub fn get() -> Result<&'static Tables, FftError> {
        TABLES.get().ok_or(FftError::Uninitialized)
    }
}

#[cfg(feature = "std")]
pub use global::initialize;

#[cfg(feature = "std")]
pub use global::get as get_global;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
