// src/common.rs

/// Every failure mode this crate can report. All of them are programmer
/// errors (API misuse) rather than transient runtime failures: a buffer of
/// the wrong size, a size that is not a power of two, a size that would
/// need tables deeper than this crate precomputes, a real-FFT length below
/// the supported minimum, or `get_global()` called before `initialize()`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Two buffers that are required to have equal length do not.
    SizeMismatch,
    /// A length was given that is not a power of two.
    NotPowerOfTwo,
    /// The required table depth exceeds `MAX_TABLE_DEPTH`.
    DepthExceeded,
    /// A real-FFT length was given below the supported minimum of 16.
    RealLengthTooSmall,
    /// `get_global()` was called before `initialize()` completed.
    Uninitialized,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "buffer sizes do not match"),
            FftError::NotPowerOfTwo => write!(f, "size must be a power of two"),
            FftError::DepthExceeded => write!(f, "size exceeds the configured MAX_TABLE_DEPTH"),
            FftError::RealLengthTooSmall => {
                write!(f, "real FFT length must be at least 16")
            }
            FftError::Uninitialized => write!(f, "initialize() must be called before get_global()"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
