// src/split/real.rs
//
// The real-FFT adapter described in spec §4.7: folds an N-point real
// transform onto an (N/2)-point complex transform, then de-mixes the
// result using twiddles one stage deeper than the complex transform.
//
// Port of the teacher crate's `RealFft::process` (`float/real.rs`): the
// DC/Nyquist packing identity and the n/4 conjugation special case are the
// same identities the teacher arrived at (there, commented out mid-port
// against an interleaved `Complex32` buffer). This version completes both
// directions against the split `f64` layout, with the inverse direction
// solved algebraically from the forward identity rather than left as a
// TODO (see the derivation note on `unmix_pair`).

use super::complex::fft_split;
use crate::common::FftError;
use crate::tables::Tables;

pub(crate) const MIN_HALF_LEN: usize = 8;

/// Runs the real-FFT adapter in place on `(re, im)`, each of length
/// `n/2 = N/2` for an effective real length `N`.
///
/// Forward: `re`/`im` hold the even/odd-indexed real samples on entry and
/// the packed half-spectrum (see spec §6) on exit. Inverse: the reverse.
pub fn real_fft_split(
    re: &mut [f64],
    im: &mut [f64],
    forward: bool,
    normalize: f64,
    tables: &Tables,
) -> Result<(), FftError> {
    let half_n = re.len();
    if im.len() != half_n {
        return Err(FftError::SizeMismatch);
    }
    if !half_n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    if half_n < MIN_HALF_LEN {
        return Err(FftError::RealLengthTooSmall);
    }
    let l = tables.check_complex_depth(half_n)?;
    let depth = l + 1;

    if forward {
        fft_split(re, im, true, 1.0, tables)?;
        split_spectrum(re, im, depth, tables);
    } else {
        combine_spectrum(re, im, depth, tables);
        fft_split(re, im, false, normalize, tables)?;
    }

    Ok(())
}

/// Forward de-mix: turns the raw (N/2)-point complex spectrum into the
/// packed N-point real half-spectrum.
fn split_spectrum(re: &mut [f64], im: &mut [f64], depth: u32, tables: &Tables) {
    let half_n = re.len();
    let quarter = half_n / 4;
    let cos = tables.cos(depth);
    let sin = tables.sin(depth);

    for k in 1..quarter {
        let m = half_n - k;
        let e = re[k] + re[m];
        let f = im[k] - im[m];
        let p = re[k] - re[m];
        let q = im[k] + im[m];
        let a = p * sin[k];
        let b = q * cos[k];
        let c = p * cos[k];
        let d = q * sin[k];

        re[k] = 0.5 * (e + (a + b));
        im[k] = 0.5 * (f + (d - c));
        re[m] = 0.5 * (e - (a + b));
        im[m] = 0.5 * ((d - c) - f);
    }

    // k == m == n/4: the rotation degenerates to a pure conjugation.
    im[quarter] = -im[quarter];

    // DC and Nyquist share slot 0.
    let r0 = re[0];
    let i0 = im[0];
    re[0] = r0 + i0;
    im[0] = r0 - i0;
}

/// Inverse de-mix: algebraically inverse to [`split_spectrum`].
///
/// Forward computes, for each mirrored pair `(k, m)`:
///   e = F_re[k]+F_re[m],  f = F_im[k]-F_im[m]
///   P = F_re[k]-F_re[m],  Q = F_im[k]+F_im[m]
///   a = P*sin, b = Q*cos, c = P*cos, d = Q*sin
///   X_re[k] = (e+(a+b))/2, X_im[k] = (f+(d-c))/2
///   X_re[m] = (e-(a+b))/2, X_im[m] = ((d-c)-f)/2
///
/// Given X values, `e = X_re[k]+X_re[m]`, `f = X_im[k]-X_im[m]`,
/// `(a+b) = X_re[k]-X_re[m]`, `(d-c) = X_im[k]+X_im[m]` fall out directly
/// by adding/subtracting the two equations in each row. What remains is
/// the 2x2 system `u*sin + v*cos = a+b`, `v*sin - u*cos = d-c` for
/// `u = F_re[k]-F_re[m]` and `v = F_im[k]+F_im[m]`; since
/// `[[sin, cos], [-cos, sin]]` is orthogonal (determinant `sin^2+cos^2=1`),
/// its inverse is its transpose: `u = (a+b)*sin - (d-c)*cos`,
/// `v = (a+b)*cos + (d-c)*sin`.
fn combine_spectrum(re: &mut [f64], im: &mut [f64], depth: u32, tables: &Tables) {
    let half_n = re.len();
    let quarter = half_n / 4;
    let cos = tables.cos(depth);
    let sin = tables.sin(depth);

    let dc = re[0];
    let nyquist = im[0];
    re[0] = 0.5 * (dc + nyquist);
    im[0] = 0.5 * (dc - nyquist);

    im[quarter] = -im[quarter];

    for k in 1..quarter {
        let m = half_n - k;
        let e = re[k] + re[m];
        let f = im[k] - im[m];
        let p = re[k] - re[m]; // a+b
        let q = im[k] + im[m]; // d-c

        let u = p * sin[k] - q * cos[k];
        let v = p * cos[k] + q * sin[k];

        re[k] = 0.5 * (e + u);
        re[m] = 0.5 * (e - u);
        im[k] = 0.5 * (f + v);
        im[m] = 0.5 * (v - f);
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
