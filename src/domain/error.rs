// ============================================================
// Layer 3 — Error Types
// ============================================================
// Recoverable failures raised by the library layers.
// Shape mismatches inside a forward pass are NOT represented
// here: they surface as panics from the tensor backend.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SdmError {
    /// A network hyper-parameter is unusable (zero width, bad dropout)
    #[error("invalid network config: {field} {reason}")]
    InvalidConfig {
        field:  &'static str,
        reason: String,
    },

    /// Coordinates outside the valid lat/lon ranges or not finite
    #[error("invalid location (lat={lat}, lon={lon}): {reason}")]
    InvalidLocation {
        lat:    f64,
        lon:    f64,
        reason: &'static str,
    },

    #[error("feature batch is empty")]
    EmptyBatch,

    /// Row `row` has `found` features where the first row had `expected`
    #[error("feature row {row} has {found} values, expected {expected}")]
    RaggedBatch {
        row:      usize,
        expected: usize,
        found:    usize,
    },
}

impl SdmError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}
