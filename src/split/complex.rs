// src/split/complex.rs
//
// The split-layout radix-2 decimation-in-time butterfly, staged and
// specialized by SIMD lane width per spec §4.6. Port of the teacher
// crate's `radix_2_dit_fft_core` (`float/core.rs`), generalized from one
// interleaved `Complex32` buffer to two parallel `f64` slices, and from a
// single scalar inner loop to four monomorphized lane-width kernels.

use crate::common::FftError;
use crate::tables::Tables;

/// Runs the in-place radix-2 Cooley-Tukey transform on the split pair
/// `(r, i)`, both of length `n = 2^L`.
///
/// `forward` selects the transform direction; `normalize` scales the
/// inverse result (the conventional inverse DFT uses `normalize = 1.0`,
/// dividing by `n`).
pub fn fft_split(
    r: &mut [f64],
    i: &mut [f64],
    forward: bool,
    normalize: f64,
    tables: &Tables,
) -> Result<(), FftError> {
    let n = r.len();
    if i.len() != n {
        return Err(FftError::SizeMismatch);
    }
    let l = tables.check_complex_depth(n)?;

    if l == 0 {
        // n == 1: the DFT of a single point is itself.
        return Ok(());
    }

    tables.bit_reverse_split(r, i, l);

    for s in 1..=l {
        let m = 1usize << s;
        let h = m / 2;
        let cos = tables.cos(s);
        let sin = if forward { tables.sin(s) } else { tables.sin_inv(s) };

        match s {
            1 | 2 => butterfly_stage::<1>(r, i, cos, sin, m, h),
            3 => butterfly_stage::<2>(r, i, cos, sin, m, h),
            4 => butterfly_stage::<4>(r, i, cos, sin, m, h),
            _ => butterfly_stage::<8>(r, i, cos, sin, m, h),
        }
    }

    if !forward {
        let scale = normalize / n as f64;
        scale_split(r, i, scale);
    }

    Ok(())
}

/// One butterfly stage at lane width `WIDTH`. `m` is the block size
/// (`2^s`), `h = m/2` is the half-block (and the number of twiddles
/// consumed per block). `WIDTH` must evenly divide `h` — guaranteed by the
/// caller's dispatch table, since `h = 2^(s-1)` and the widths chosen
/// (1, 2, 4, 8) are selected so this always holds for `s >= 3`.
#[inline]
fn butterfly_stage<const WIDTH: usize>(
    r: &mut [f64],
    i: &mut [f64],
    cos: &[f64],
    sin: &[f64],
    m: usize,
    h: usize,
) {
    let n = r.len();
    let mut k = 0;
    while k < n {
        let mut jb = 0;
        while jb < h {
            let mut w_re = [0.0f64; WIDTH];
            let mut w_im = [0.0f64; WIDTH];
            let mut t_re = [0.0f64; WIDTH];
            let mut t_im = [0.0f64; WIDTH];

            for l in 0..WIDTH {
                w_re[l] = cos[jb + l];
                w_im[l] = sin[jb + l];
            }
            for l in 0..WIDTH {
                let o = k + jb + l + h;
                t_re[l] = w_re[l] * r[o] - w_im[l] * i[o];
                t_im[l] = w_im[l] * r[o] + w_re[l] * i[o];
            }
            for l in 0..WIDTH {
                let e = k + jb + l;
                let o = e + h;
                let re_e = r[e];
                let im_e = i[e];
                r[e] = re_e + t_re[l];
                i[e] = im_e + t_im[l];
                r[o] = re_e - t_re[l];
                i[o] = im_e - t_im[l];
            }

            jb += WIDTH;
        }
        k += m;
    }
}

/// Scales both arrays by `scale`, chunked at the widest lane width with a
/// scalar remainder loop for lengths not divisible by 8.
fn scale_split(r: &mut [f64], i: &mut [f64], scale: f64) {
    const WIDTH: usize = 8;
    let n = r.len();
    let chunks = n / WIDTH;

    for c in 0..chunks {
        let base = c * WIDTH;
        for l in 0..WIDTH {
            r[base + l] *= scale;
            i[base + l] *= scale;
        }
    }
    for idx in (chunks * WIDTH)..n {
        r[idx] *= scale;
        i[idx] *= scale;
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
