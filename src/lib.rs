#![no_std]

// Enables the standard library only for tests, so you can run
// 'cargo test' on your PC normally, and for the `std` feature itself.
#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod bitmath;
pub mod common;
pub mod interleaved;
pub mod split;
pub mod tables;

pub use common::FftError;
pub use interleaved::{fft_interleaved, real_fft_interleaved, Flags};
pub use split::complex::fft_split;
pub use split::real::real_fft_split;
pub use tables::Tables;

#[cfg(feature = "std")]
pub use tables::{get_global, initialize};

/// Upper bound on the table depth this crate will precompute.
///
/// A complex FFT of length `2^L` needs tables through depth `L`; the
/// real-FFT adapter additionally needs depth `L+1`. The binding constraint
/// is `L+1 < MAX_TABLE_DEPTH`, adopted uniformly for both transforms.
pub const MAX_TABLE_DEPTH: u32 = 18;
