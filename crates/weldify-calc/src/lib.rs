//! Weld joint geometry, filler metal and cost calculators.
//!
//! All calculators are pure functions over plain value types. Invalid input
//! never panics or returns an error: it is folded into the note-only variant
//! of the result so the caller can always display something.
//!
//! - [`compute_joint_geometry`]: cross-section, volume and mass per metre
//!   for V-groove butt, square butt and fillet joints
//! - [`compute_filler_cost`]: filler metal to purchase and the cost of a weld
//! - [`estimate_cooling`]: rough post-weld cooling window
//!
//! Intermediate values are dimensioned newtypes from [`units`]; every scale
//! change is an explicit conversion.
//!
//! The cross-sectional area of a joint result is meant to be fed into the
//! filler cost calculator:
//!
//! ```
//! use weldify_calc::{
//!     CostFormat, FillerCostInput, JointGeometryInput, JointSpec, compute_filler_cost,
//!     compute_joint_geometry,
//! };
//!
//! let joint = compute_joint_geometry(&JointGeometryInput {
//!     joint: JointSpec::Fillet { leg_mm: 6.0 },
//!     density_g_cm3: None,
//! });
//! let area = joint.geometry().unwrap().area;
//!
//! let cost = compute_filler_cost(&FillerCostInput {
//!     weld_length_m: 2.5,
//!     cross_section_mm2: area.value(),
//!     density_g_cm3: 7.85,
//!     deposition_efficiency_pct: 90.0,
//!     filler_cost_per_kg: 4.2,
//!     gas_cost_per_m: Some(0.5),
//!     labor_cost_per_hour: 35.0,
//!     travel_speed_m_per_h: 6.0,
//! });
//! assert!(cost.breakdown().is_some());
//! println!("{}", cost.report(&CostFormat::default()).total_cost);
//! ```

mod cooling;
mod error;
mod filler;
mod format;
mod joint;
mod params;
pub mod units;

pub use cooling::{CoolingEstimate, CoolingInput, CoolingResult, estimate_cooling};
pub use error::InvalidInput;
pub use filler::{
    FillerCostBreakdown, FillerCostInput, FillerCostReport, FillerCostResult, compute_filler_cost,
};
pub use format::{CostFormat, DEFAULT_CURRENCY, NOT_APPLICABLE};
pub use joint::{
    JointForm, JointGeometry, JointGeometryInput, JointGeometryResult, JointKind, JointSpec,
    STEEL_DENSITY, compute_joint_geometry, compute_joint_geometry_form,
};
pub use params::{MaterialType, WeldingParameters, WeldingProcess};
