//! Rough cooling-time estimate after welding.

use crate::error::{InvalidInput, positive};
use crate::params::MaterialType;
use crate::units::Millimeters;

/// Cooling estimate request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoolingInput {
    /// Base material.
    pub material: MaterialType,
    /// Plate thickness (mm).
    pub thickness_mm: f64,
    /// Ambient temperature (°C).
    pub ambient_c: f64,
}

/// Estimated cooling window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoolingEstimate {
    /// Lower bound (minutes).
    pub min_minutes: u32,
    /// Upper bound (minutes).
    pub max_minutes: u32,
    /// Context for the estimate.
    pub note: String,
}

impl CoolingEstimate {
    /// Range text, e.g. `10-20 minutes`.
    #[must_use]
    pub fn range(&self) -> String {
        format!("{}-{} minutes", self.min_minutes, self.max_minutes)
    }
}

/// Outcome of a cooling estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoolingResult {
    /// Estimate produced.
    Estimated(CoolingEstimate),
    /// Input rejected.
    Invalid {
        /// Explanation of the rejected input.
        note: String,
    },
}

impl CoolingResult {
    /// Estimate, if the input was valid.
    #[must_use]
    pub fn estimate(&self) -> Option<&CoolingEstimate> {
        match self {
            Self::Estimated(estimate) => Some(estimate),
            Self::Invalid { .. } => None,
        }
    }

    /// Advisory or error note.
    #[must_use]
    pub fn note(&self) -> &str {
        match self {
            Self::Estimated(estimate) => &estimate.note,
            Self::Invalid { note } => note,
        }
    }
}

/// Estimate the time a joint needs to cool down.
///
/// The window grows linearly with thickness: `0.5·t + 5` to `t + 10`
/// minutes, rounded.
pub fn estimate_cooling(input: &CoolingInput) -> CoolingResult {
    match window(input.thickness_mm) {
        Ok((min_minutes, max_minutes)) => CoolingResult::Estimated(CoolingEstimate {
            min_minutes,
            max_minutes,
            note: format!(
                "Estimate for {} at {}°C. Part geometry and the actual heat input can change the cooling time.",
                input.material, input.ambient_c
            ),
        }),
        Err(err) => CoolingResult::Invalid {
            note: format!("Invalid parameters: {err}."),
        },
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn window(thickness_mm: f64) -> Result<(u32, u32), InvalidInput> {
    let thickness = Millimeters(positive(thickness_mm, "thickness")?);
    let low = (thickness.value() * 0.5 + 5.0).round();
    let high = (thickness.value() + 10.0).round();
    Ok((low as u32, high as u32))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn input(thickness_mm: f64) -> CoolingInput {
        CoolingInput {
            material: MaterialType::CarbonSteel,
            thickness_mm,
            ambient_c: 20.0,
        }
    }

    #[test]
    fn test_ten_mm_plate() {
        let result = estimate_cooling(&input(10.0));
        let estimate = result.estimate().unwrap();
        assert_eq!(estimate.range(), "10-20 minutes");
        assert!(estimate.note.contains("Carbon steel at 20°C"));
    }

    #[test]
    fn test_rounding() {
        let estimate = estimate_cooling(&input(3.0)).estimate().cloned().unwrap();
        // 0.5 * 3 + 5 = 6.5 rounds up, 3 + 10 = 13
        assert_eq!((estimate.min_minutes, estimate.max_minutes), (7, 13));
    }

    #[test]
    fn test_zero_thickness_invalid() {
        let result = estimate_cooling(&input(0.0));
        assert!(result.estimate().is_none());
        assert!(result.note().contains("thickness"));
    }
}
