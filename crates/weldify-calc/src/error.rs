//! Input validation errors.

/// A calculator precondition that the input violated.
///
/// Never escapes the public compute functions: it is turned into the
/// note-only form of the corresponding result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// Field must be strictly positive (and finite).
    #[error("{field} must be greater than 0")]
    NotPositive {
        /// Field name as shown to the user.
        field: &'static str,
    },

    /// Field must be zero or positive (and finite).
    #[error("{field} cannot be negative")]
    Negative {
        /// Field name as shown to the user.
        field: &'static str,
    },

    /// Deposition efficiency outside `(0, 100]`.
    #[error("deposition efficiency must be greater than 0 and at most 100 (got {0})")]
    EfficiencyOutOfRange(f64),

    /// Joint kind not handled by the geometry calculator.
    #[error("unsupported joint type '{0}' (expected butt_v, butt_square or fillet)")]
    UnsupportedJoint(String),

    /// Geometry formula produced an area of zero or less.
    #[error(
        "the calculated area is zero or negative; check thickness, groove angle, root opening and leg length"
    )]
    NonPositiveArea,
}

/// Require a finite value greater than zero.
pub(crate) fn positive(value: f64, field: &'static str) -> Result<f64, InvalidInput> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput::NotPositive { field })
    }
}

/// Require a finite value greater than or equal to zero.
pub(crate) fn non_negative(value: f64, field: &'static str) -> Result<f64, InvalidInput> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput::Negative { field })
    }
}
