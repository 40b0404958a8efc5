use super::*;
use alloc::vec::Vec;

#[test]
fn check_complex_depth_rejects_non_power_of_two() {
    let t = Tables::build(8);
    assert_eq!(t.check_complex_depth(6), Err(FftError::NotPowerOfTwo));
}

#[test]
fn check_complex_depth_rejects_depth_overflow() {
    let t = Tables::build(6);
    // 2^5 = 32 needs depth 5; 5+1 = 6 >= dmax(6) -> rejected.
    assert_eq!(t.check_complex_depth(32), Err(FftError::DepthExceeded));
    // 2^4 = 16 needs depth 4; 4+1 = 5 < 6 -> accepted.
    assert_eq!(t.check_complex_depth(16), Ok(4));
}

#[test]
fn unzip_zip_round_trip_through_tables() {
    let t = Tables::build(10);
    let n = 256usize;
    let depth = crate::bitmath::ilog2_pow2(n);
    let original: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut buf = original.clone();
    t.unzip(&mut buf, depth);
    t.zip(&mut buf, depth);
    assert_eq!(buf, original);
}

#[test]
fn bit_reverse_split_is_involution() {
    let t = Tables::build(10);
    let depth = 6;
    let n = 1usize << depth;
    let r0: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let i0: Vec<f64> = (0..n).map(|i| -(i as f64)).collect();
    let mut r = r0.clone();
    let mut i = i0.clone();
    t.bit_reverse_split(&mut r, &mut i, depth);
    t.bit_reverse_split(&mut r, &mut i, depth);
    assert_eq!(r, r0);
    assert_eq!(i, i0);
}

#[cfg(feature = "std")]
#[test]
fn global_initialize_is_idempotent_and_unlocks_get() {
    super::initialize();
    super::initialize();
    assert!(super::get_global().is_ok());
}
