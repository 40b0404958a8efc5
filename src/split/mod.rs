// src/split/mod.rs
//
// The split real/imaginary buffer API (spec §4): `complex` is the core
// in-place radix-2 transform, `real` is the real-input adapter built on
// top of it.

pub mod complex;
pub mod real;
