//! Joint preparation geometry: cross-section, volume and mass per metre.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidInput, positive};
use crate::units::{
    CubicCentimetersPerMeter, Degrees, GramsPerCubicCentimeter, KilogramsPerMeter, Meters,
    Millimeters, SquareMillimeters,
};

/// Density of carbon steel, used when no density is supplied.
pub const STEEL_DENSITY: GramsPerCubicCentimeter = GramsPerCubicCentimeter(7.85);

/// Bead width assumed for a closed square butt joint, as a share of thickness.
const SQUARE_BUTT_WIDTH_RATIO: f64 = 0.1;

/// Lower bound for the assumed square butt bead width.
const SQUARE_BUTT_MIN_WIDTH: Millimeters = Millimeters(1.0);

const BASE_NOTE: &str =
    "Simplified calculation. Weld reinforcement and excess root penetration are not accounted for.";
const FILLET_NOTE: &str = " Fillet welds are assumed to have equal legs.";
const SQUARE_BUTT_NOTE: &str = " For square butt joints the bead width is the root opening, or an estimate when no opening is given.";

/// Supported joint kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JointKind {
    /// Single V-groove butt joint.
    ButtV,
    /// Square (unprepared) butt joint.
    ButtSquare,
    /// Equal-leg fillet joint.
    Fillet,
}

impl JointKind {
    /// Identifier used in forms and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ButtV => "butt_v",
            Self::ButtSquare => "butt_square",
            Self::Fillet => "fillet",
        }
    }
}

impl fmt::Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointKind {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "butt_v" => Ok(Self::ButtV),
            "butt_square" => Ok(Self::ButtSquare),
            "fillet" => Ok(Self::Fillet),
            _ => Err(InvalidInput::UnsupportedJoint(s.to_owned())),
        }
    }
}

/// Kind-specific joint dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JointSpec {
    /// V-groove butt joint.
    ButtV {
        /// Plate thickness (mm).
        thickness_mm: f64,
        /// Total included groove angle (degrees).
        groove_angle_deg: f64,
        /// Root opening (mm), may be 0.
        root_opening_mm: f64,
    },
    /// Square butt joint.
    ButtSquare {
        /// Plate thickness (mm).
        thickness_mm: f64,
        /// Root opening (mm); 0 means closed.
        root_opening_mm: f64,
    },
    /// Equal-leg fillet.
    Fillet {
        /// Leg length (mm).
        leg_mm: f64,
    },
}

impl JointSpec {
    /// Joint kind of this spec.
    #[must_use]
    pub fn kind(&self) -> JointKind {
        match self {
            Self::ButtV { .. } => JointKind::ButtV,
            Self::ButtSquare { .. } => JointKind::ButtSquare,
            Self::Fillet { .. } => JointKind::Fillet,
        }
    }
}

/// Joint geometry request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointGeometryInput {
    /// Joint kind and dimensions.
    pub joint: JointSpec,
    /// Weld metal density (g/cm³). Defaults to [`STEEL_DENSITY`] when unset,
    /// zero or NaN; negative values are invalid.
    pub density_g_cm3: Option<f64>,
}

/// Flat, form-shaped joint request with the kind as free text.
///
/// Fields that do not apply to the chosen kind are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JointForm {
    /// Joint kind identifier (`butt_v`, `butt_square`, `fillet`).
    pub kind: String,
    /// Plate thickness (mm).
    pub thickness_mm: f64,
    /// Total groove angle (degrees).
    pub groove_angle_deg: f64,
    /// Root opening (mm).
    pub root_opening_mm: f64,
    /// Fillet leg length (mm).
    pub leg_mm: f64,
    /// Weld metal density (g/cm³).
    pub density_g_cm3: Option<f64>,
}

impl TryFrom<&JointForm> for JointGeometryInput {
    type Error = InvalidInput;

    fn try_from(form: &JointForm) -> Result<Self, Self::Error> {
        let joint = match form.kind.parse::<JointKind>()? {
            JointKind::ButtV => JointSpec::ButtV {
                thickness_mm: form.thickness_mm,
                groove_angle_deg: form.groove_angle_deg,
                root_opening_mm: form.root_opening_mm,
            },
            JointKind::ButtSquare => JointSpec::ButtSquare {
                thickness_mm: form.thickness_mm,
                root_opening_mm: form.root_opening_mm,
            },
            JointKind::Fillet => JointSpec::Fillet {
                leg_mm: form.leg_mm,
            },
        };
        Ok(Self {
            joint,
            density_g_cm3: form.density_g_cm3,
        })
    }
}

/// Computed joint geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct JointGeometry {
    /// Weld cross-sectional area.
    pub area: SquareMillimeters,
    /// Weld metal volume per metre of joint.
    pub volume_per_meter: CubicCentimetersPerMeter,
    /// Weld metal mass per metre of joint.
    pub mass_per_meter: KilogramsPerMeter,
    /// Assumptions behind the numbers.
    pub note: String,
}

/// Outcome of a joint geometry calculation.
#[derive(Clone, Debug, PartialEq)]
pub enum JointGeometryResult {
    /// All quantities computed.
    Computed(JointGeometry),
    /// Input rejected; no numbers are produced.
    Invalid {
        /// Explanation of the rejected input.
        note: String,
    },
}

impl JointGeometryResult {
    /// Computed geometry, if the input was valid.
    #[must_use]
    pub fn geometry(&self) -> Option<&JointGeometry> {
        match self {
            Self::Computed(geometry) => Some(geometry),
            Self::Invalid { .. } => None,
        }
    }

    /// Advisory or error note.
    #[must_use]
    pub fn note(&self) -> &str {
        match self {
            Self::Computed(geometry) => &geometry.note,
            Self::Invalid { note } => note,
        }
    }
}

impl From<InvalidInput> for JointGeometryResult {
    fn from(err: InvalidInput) -> Self {
        Self::Invalid {
            note: format!("Insufficient or invalid parameters: {err}."),
        }
    }
}

/// Compute weld cross-section, volume and mass per metre for a joint.
///
/// # Examples
///
/// ```
/// use weldify_calc::{JointGeometryInput, JointSpec, compute_joint_geometry};
///
/// let result = compute_joint_geometry(&JointGeometryInput {
///     joint: JointSpec::Fillet { leg_mm: 10.0 },
///     density_g_cm3: Some(7.85),
/// });
/// let geometry = result.geometry().unwrap();
/// assert_eq!(geometry.area.to_string(), "50.00 mm²");
/// ```
pub fn compute_joint_geometry(input: &JointGeometryInput) -> JointGeometryResult {
    match try_compute(input) {
        Ok(geometry) => JointGeometryResult::Computed(geometry),
        Err(err) => err.into(),
    }
}

/// Compute geometry from a form with a free-text joint kind.
pub fn compute_joint_geometry_form(form: &JointForm) -> JointGeometryResult {
    match JointGeometryInput::try_from(form) {
        Ok(input) => compute_joint_geometry(&input),
        Err(err) => err.into(),
    }
}

fn try_compute(input: &JointGeometryInput) -> Result<JointGeometry, InvalidInput> {
    let density = match input.density_g_cm3 {
        Some(density) if density == 0.0 || density.is_nan() => STEEL_DENSITY,
        Some(density) => GramsPerCubicCentimeter(positive(density, "density")?),
        None => STEEL_DENSITY,
    };

    let (area, remark) = cross_section(&input.joint)?;
    if area.value() <= 0.0 || !area.value().is_finite() {
        return Err(InvalidInput::NonPositiveArea);
    }

    let one_meter = Meters(1.0).to_centimeters();
    let volume = area.to_square_centimeters() * one_meter;
    let mass = (volume * density).to_kilograms();

    Ok(JointGeometry {
        area,
        volume_per_meter: volume.per_meter(),
        mass_per_meter: mass.per_meter(),
        note: format!("{BASE_NOTE}{remark}"),
    })
}

/// Cross-sectional area and the kind-specific note fragment.
fn cross_section(joint: &JointSpec) -> Result<(SquareMillimeters, &'static str), InvalidInput> {
    match *joint {
        JointSpec::Fillet { leg_mm } => {
            let leg = Millimeters(positive(leg_mm, "leg length")?);
            Ok(((leg * leg) * 0.5, FILLET_NOTE))
        }
        JointSpec::ButtSquare {
            thickness_mm,
            root_opening_mm,
        } => {
            let thickness = Millimeters(positive(thickness_mm, "thickness")?);
            let width = if root_opening_mm > 0.0 {
                Millimeters(root_opening_mm)
            } else {
                Millimeters(
                    SQUARE_BUTT_MIN_WIDTH
                        .value()
                        .max(thickness.value() * SQUARE_BUTT_WIDTH_RATIO),
                )
            };
            Ok((thickness * width, SQUARE_BUTT_NOTE))
        }
        JointSpec::ButtV {
            thickness_mm,
            groove_angle_deg,
            root_opening_mm,
        } => {
            let thickness = Millimeters(positive(thickness_mm, "thickness")?);
            let angle = Degrees(positive(groove_angle_deg, "groove angle")?);
            let root_opening = Millimeters(non_negative_or_zero(root_opening_mm));
            let half_angle_tan = (angle.to_radians() / 2.0).tan();
            let area = thickness * root_opening + (thickness * thickness) * half_angle_tan;
            Ok((area, ""))
        }
    }
}

/// Root opening with NaN treated as "not given".
fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn compute(joint: JointSpec) -> JointGeometryResult {
        compute_joint_geometry(&JointGeometryInput {
            joint,
            density_g_cm3: Some(7.85),
        })
    }

    #[test]
    fn test_fillet_area_and_mass() {
        let result = compute(JointSpec::Fillet { leg_mm: 10.0 });
        let geometry = result.geometry().unwrap();
        assert_close(geometry.area.value(), 50.0);
        assert_close(geometry.volume_per_meter.value(), 50.0);
        assert_close(geometry.mass_per_meter.value(), 0.3925);
        assert!(geometry.note.contains("equal legs"));
    }

    #[test]
    fn test_square_butt_closed_uses_min_width() {
        let result = compute(JointSpec::ButtSquare {
            thickness_mm: 10.0,
            root_opening_mm: 0.0,
        });
        assert_close(result.geometry().unwrap().area.value(), 10.0);
    }

    #[test]
    fn test_square_butt_thick_plate_uses_ten_percent() {
        let result = compute(JointSpec::ButtSquare {
            thickness_mm: 30.0,
            root_opening_mm: 0.0,
        });
        assert_close(result.geometry().unwrap().area.value(), 90.0);
    }

    #[test]
    fn test_square_butt_with_root_opening() {
        let result = compute(JointSpec::ButtSquare {
            thickness_mm: 8.0,
            root_opening_mm: 3.0,
        });
        assert_close(result.geometry().unwrap().area.value(), 24.0);
    }

    #[test]
    fn test_v_groove() {
        let result = compute(JointSpec::ButtV {
            thickness_mm: 10.0,
            groove_angle_deg: 60.0,
            root_opening_mm: 2.0,
        });
        let geometry = result.geometry().unwrap();
        let expected = 20.0 + 100.0 * 30f64.to_radians().tan();
        assert_close(geometry.area.value(), expected);
        assert_eq!(geometry.area.to_string(), "77.74 mm²");
        assert!(!geometry.note.contains("equal legs"));
    }

    #[test]
    fn test_v_groove_without_root_opening() {
        let result = compute(JointSpec::ButtV {
            thickness_mm: 10.0,
            groove_angle_deg: 90.0,
            root_opening_mm: 0.0,
        });
        assert_close(result.geometry().unwrap().area.value(), 100.0);
    }

    #[test]
    fn test_v_groove_requires_angle() {
        let result = compute(JointSpec::ButtV {
            thickness_mm: 10.0,
            groove_angle_deg: 0.0,
            root_opening_mm: 2.0,
        });
        assert!(result.geometry().is_none());
        assert!(result.note().contains("groove angle"));
    }

    #[test]
    fn test_negative_root_opening_can_give_non_positive_area() {
        let result = compute(JointSpec::ButtV {
            thickness_mm: 1.0,
            groove_angle_deg: 1.0,
            root_opening_mm: -5.0,
        });
        assert!(result.geometry().is_none());
        assert!(result.note().contains("zero or negative"));
    }

    #[test]
    fn test_fillet_requires_leg() {
        let result = compute(JointSpec::Fillet { leg_mm: 0.0 });
        assert!(matches!(result, JointGeometryResult::Invalid { .. }));
        assert!(result.note().contains("leg length"));
    }

    #[test]
    fn test_missing_thickness() {
        let result = compute(JointSpec::ButtSquare {
            thickness_mm: -1.0,
            root_opening_mm: 2.0,
        });
        assert!(result.note().contains("thickness"));
    }

    #[test]
    fn test_default_density_is_steel() {
        let result = compute_joint_geometry(&JointGeometryInput {
            joint: JointSpec::Fillet { leg_mm: 10.0 },
            density_g_cm3: None,
        });
        assert_close(result.geometry().unwrap().mass_per_meter.value(), 0.3925);
    }

    #[test]
    fn test_zero_or_nan_density_falls_back_to_steel() {
        for density in [0.0, f64::NAN] {
            let result = compute_joint_geometry(&JointGeometryInput {
                joint: JointSpec::Fillet { leg_mm: 10.0 },
                density_g_cm3: Some(density),
            });
            let geometry = result.geometry().unwrap();
            assert_eq!(geometry.area.to_string(), "50.00 mm²");
            assert_close(geometry.mass_per_meter.value(), 0.3925);
        }
    }

    #[test]
    fn test_negative_density_rejected() {
        let result = compute_joint_geometry(&JointGeometryInput {
            joint: JointSpec::Fillet { leg_mm: 10.0 },
            density_g_cm3: Some(-1.0),
        });
        assert!(result.geometry().is_none());
        assert!(result.note().contains("density"));
    }

    #[test]
    fn test_form_unknown_kind() {
        let form = JointForm {
            kind: "lap".to_owned(),
            thickness_mm: 5.0,
            ..Default::default()
        };
        let result = compute_joint_geometry_form(&form);
        assert!(result.geometry().is_none());
        assert!(result.note().contains("unsupported joint type 'lap'"));
    }

    #[test]
    fn test_form_square_butt() {
        let form = JointForm {
            kind: "butt_square".to_owned(),
            thickness_mm: 10.0,
            ..Default::default()
        };
        let result = compute_joint_geometry_form(&form);
        assert_close(result.geometry().unwrap().area.value(), 10.0);
    }

    #[test]
    fn test_joint_kind_parsing() {
        assert_eq!("butt-v".parse::<JointKind>(), Ok(JointKind::ButtV));
        assert_eq!(" Fillet ".parse::<JointKind>(), Ok(JointKind::Fillet));
        assert_eq!(JointKind::ButtSquare.to_string(), "butt_square");
    }

    #[test]
    fn test_spec_kind() {
        assert_eq!(JointSpec::Fillet { leg_mm: 1.0 }.kind(), JointKind::Fillet);
    }
}
