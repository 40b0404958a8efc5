use super::*;
use alloc::{vec, vec::Vec};

#[test]
fn depths_zero_and_one_are_empty() {
    let unzip = build_unzip_cycle_tables(4);
    assert!(unzip[0].is_empty());
    assert!(unzip[1].is_empty());
}

#[test]
fn depth_two_is_a_single_swap() {
    let unzip = build_unzip_cycle_tables(4);
    let mut cycles = unzip[2].clone();
    cycles.sort();
    assert_eq!(cycles, vec![vec![1u32, 2]]);
}

#[test]
fn unzip_deinterleaves_even_odd() {
    for d in 2..12u32 {
        let unzip = build_unzip_cycle_tables(d + 1);
        let n = 1usize << d;
        let mut buf: Vec<f64> = (0..n).map(|i| i as f64).collect();
        apply_cycles(&mut buf, &unzip[d as usize]);

        let half = n / 2;
        for k in 0..half {
            assert_eq!(buf[k], (2 * k) as f64, "depth {d} evens");
            assert_eq!(buf[half + k], (2 * k + 1) as f64, "depth {d} odds");
        }
    }
}

#[test]
fn unzip_then_zip_is_identity() {
    for d in 2..12u32 {
        let unzip = build_unzip_cycle_tables(d + 1);
        let zip = build_zip_cycle_tables(d + 1);
        let n = 1usize << d;
        let original: Vec<f64> = (0..n).map(|i| i as f64 * 1.5).collect();
        let mut buf = original.clone();

        apply_cycles(&mut buf, &unzip[d as usize]);
        apply_cycles(&mut buf, &zip[d as usize]);

        assert_eq!(buf, original, "depth {d}");
    }
}

#[test]
fn every_cycle_excludes_the_two_fixed_points() {
    for d in 2..10u32 {
        let unzip = build_unzip_cycle_tables(d + 1);
        let n = 1usize << d;
        for cycle in &unzip[d as usize] {
            for &idx in cycle {
                assert!(idx != 0 && idx as usize != n - 1);
            }
        }
    }
}
