//! Construction-time configuration errors
//!
//! The per-tick path never fails. Anything that would make the simulation
//! numerically unsound is rejected here, before a world exists.

use thiserror::Error;

/// Errors raised while building or loading tuning and scene bodies.
#[derive(Error, Debug)]
pub enum TuningError {
    /// A value that must be strictly positive was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Dotted path of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A value that must be zero or more was negative.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Dotted path of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// NaN or infinity where a finite number is required.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Dotted path of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Value outside a closed range.
    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        /// Dotted path of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },

    /// Value outside an open range.
    #[error("{name} must be within ({min}, {max}), got {value}")]
    OutOfOpenRange {
        /// Dotted path of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
        /// Exclusive lower bound.
        min: f32,
        /// Exclusive upper bound.
        max: f32,
    },

    /// Zone radii must grow strictly outward from the star.
    #[error("zone radii must be strictly increasing, got {0:?}")]
    UnorderedZones([f32; 3]),

    /// Tuning or settings JSON could not be parsed.
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Require `value > 0` and finite.
pub(crate) fn positive(name: &'static str, value: f32) -> Result<f32, TuningError> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(TuningError::NotPositive { name, value });
    }
    Ok(value)
}

/// Require `value >= 0` and finite.
pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<f32, TuningError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(TuningError::Negative { name, value });
    }
    Ok(value)
}

/// Require a finite value.
pub(crate) fn finite(name: &'static str, value: f32) -> Result<f32, TuningError> {
    if !value.is_finite() {
        return Err(TuningError::NotFinite { name, value });
    }
    Ok(value)
}

/// Require `min <= value <= max`.
pub(crate) fn in_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<f32, TuningError> {
    finite(name, value)?;
    if value < min || value > max {
        return Err(TuningError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Require `min < value < max`.
pub(crate) fn strictly_between(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<f32, TuningError> {
    finite(name, value)?;
    if value <= min || value >= max {
        return Err(TuningError::OutOfOpenRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
