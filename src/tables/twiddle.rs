// src/tables/twiddle.rs
//
// Builds the per-depth twiddle-factor tables described in spec §4.3. Port
// of the teacher crate's `precompute_twiddles`, generalized from a single
// N/2-length `Complex32` array to three parallel `f64` arrays held per
// depth, one full `cos`/`sin` pair per depth up to `MAX_TABLE_DEPTH`, plus
// the negated-sin table used for the inverse direction.

use alloc::vec::Vec;
use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
fn sin_cos(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

#[cfg(feature = "std")]
fn sin_cos(angle: f64) -> (f64, f64) {
    (angle.sin(), angle.cos())
}

pub(crate) struct TwiddleTables {
    pub(crate) cos: Vec<Vec<f64>>,
    pub(crate) sin: Vec<Vec<f64>>,
    pub(crate) sin_inv: Vec<Vec<f64>>,
}

pub(crate) fn build_twiddle_tables(dmax: u32) -> TwiddleTables {
    let mut cos = Vec::with_capacity(dmax as usize);
    let mut sin = Vec::with_capacity(dmax as usize);
    let mut sin_inv = Vec::with_capacity(dmax as usize);

    for d in 0..dmax {
        let size = 1usize << d;
        let mut c = Vec::with_capacity(size);
        let mut s = Vec::with_capacity(size);
        let mut si = Vec::with_capacity(size);
        for k in 0..size {
            let theta = -2.0 * PI * (k as f64) / (size as f64);
            let (sin_theta, cos_theta) = sin_cos(theta);
            c.push(cos_theta);
            s.push(sin_theta);
            si.push(-sin_theta);
        }
        cos.push(c);
        sin.push(s);
        sin_inv.push(si);
    }

    TwiddleTables { cos, sin, sin_inv }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
