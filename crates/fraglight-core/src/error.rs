//! Error type for lighting configuration.

/// Errors returned by lighting setters, LUT synthesis and register encoding.
///
/// Every error is raised before any state is touched: a failed call leaves
/// stored values and dirty bits exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LightingError {
    /// All light slots of the environment are taken.
    #[error("light environment is full ({capacity} lights)")]
    CapacityExceeded { capacity: usize },

    /// An index (light id, geometric factor, texture unit) is out of range.
    #[error("{what} index {index} out of range (max {max})")]
    InvalidIndex {
        what: &'static str,
        index: usize,
        max: usize,
    },

    /// Distance attenuation range is empty or reversed.
    #[error("invalid distance range: to ({to}) must be greater than from ({from})")]
    InvalidRange { from: f32, to: f32 },

    /// A raw LUT array does not have exactly 256 samples.
    #[error("expected {expected} LUT samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A numeric input cannot be encoded (NaN or infinite).
    #[error("cannot encode non-finite value {value}")]
    InvalidParameter { value: f32 },
}
