use super::*;

const EPS: f64 = 1e-12;

#[test]
fn depth_zero_is_trivial() {
    let t = build_twiddle_tables(4);
    assert_eq!(t.cos[0].len(), 1);
    assert!((t.cos[0][0] - 1.0).abs() < EPS);
    assert!(t.sin[0][0].abs() < EPS);
}

#[test]
fn cos_table_zero_index_is_one_sin_is_zero() {
    let t = build_twiddle_tables(10);
    for d in 0..10 {
        assert!((t.cos[d][0] - 1.0).abs() < EPS, "depth {d}");
        assert!(t.sin[d][0].abs() < EPS, "depth {d}");
    }
}

#[test]
fn sin_inv_is_negated_sin() {
    let t = build_twiddle_tables(8);
    for d in 0..8 {
        for k in 0..t.sin[d].len() {
            assert!((t.sin_inv[d][k] + t.sin[d][k]).abs() < EPS);
        }
    }
}

#[test]
fn unit_magnitude() {
    let t = build_twiddle_tables(8);
    for d in 0..8 {
        for k in 0..t.cos[d].len() {
            let mag = t.cos[d][k] * t.cos[d][k] + t.sin[d][k] * t.sin[d][k];
            assert!((mag - 1.0).abs() < 1e-14, "depth {d} k {k}");
        }
    }
}

#[test]
fn depth_three_matches_known_angles() {
    let t = build_twiddle_tables(4);
    let sqrt2_2 = core::f64::consts::FRAC_1_SQRT_2;
    let tol = 1e-12;
    assert!((t.cos[3][0] - 1.0).abs() < tol);
    assert!((t.sin[3][0] - 0.0).abs() < tol);
    assert!((t.cos[3][1] - sqrt2_2).abs() < tol);
    assert!((t.sin[3][1] + sqrt2_2).abs() < tol);
    assert!((t.cos[3][2] - 0.0).abs() < tol);
    assert!((t.sin[3][2] + 1.0).abs() < tol);
}
