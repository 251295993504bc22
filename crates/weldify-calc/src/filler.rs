//! Filler metal consumption and weld cost estimate.

use crate::error::{InvalidInput, non_negative, positive};
use crate::format::{CostFormat, NOT_APPLICABLE};
use crate::units::{
    GramsPerCubicCentimeter, Hours, Kilograms, Meters, MetersPerHour, Money, MoneyPerHour,
    MoneyPerKilogram, MoneyPerMeter, Percent, SquareMillimeters,
};

const COMPUTED_NOTE: &str = "Based on the supplied parameters. Deposition efficiency and travel speed dominate the result; gas cost is simplified.";
const INVALID_HINT: &str =
    "Enter valid positive values for every field; deposition efficiency must be above 0 and at most 100.";

/// Filler cost request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillerCostInput {
    /// Weld length (m).
    pub weld_length_m: f64,
    /// Weld cross-sectional area (mm²).
    pub cross_section_mm2: f64,
    /// Weld metal density (g/cm³).
    pub density_g_cm3: f64,
    /// Share of consumed filler that ends up in the joint (%).
    pub deposition_efficiency_pct: f64,
    /// Filler metal price per kg.
    pub filler_cost_per_kg: f64,
    /// Shielding gas cost per metre of weld, if any.
    pub gas_cost_per_m: Option<f64>,
    /// Labour cost per hour.
    pub labor_cost_per_hour: f64,
    /// Travel speed (m/h).
    pub travel_speed_m_per_h: f64,
}

/// Validated input in dimensioned form.
struct ValidatedInput {
    length: Meters,
    area: SquareMillimeters,
    density: GramsPerCubicCentimeter,
    efficiency: Percent,
    filler_price: MoneyPerKilogram,
    gas_price: MoneyPerMeter,
    labor_rate: MoneyPerHour,
    speed: MetersPerHour,
}

impl FillerCostInput {
    fn validate(&self) -> Result<ValidatedInput, InvalidInput> {
        let efficiency = positive(self.deposition_efficiency_pct, "deposition efficiency")
            .map_err(|_| InvalidInput::EfficiencyOutOfRange(self.deposition_efficiency_pct))?;
        if efficiency > 100.0 {
            return Err(InvalidInput::EfficiencyOutOfRange(efficiency));
        }

        Ok(ValidatedInput {
            length: Meters(positive(self.weld_length_m, "weld length")?),
            area: SquareMillimeters(positive(self.cross_section_mm2, "cross-sectional area")?),
            density: GramsPerCubicCentimeter(positive(self.density_g_cm3, "material density")?),
            efficiency: Percent(efficiency),
            filler_price: MoneyPerKilogram(non_negative(
                self.filler_cost_per_kg,
                "filler metal cost",
            )?),
            gas_price: MoneyPerMeter(non_negative(
                self.gas_cost_per_m.unwrap_or(0.0),
                "gas cost",
            )?),
            labor_rate: MoneyPerHour(non_negative(self.labor_cost_per_hour, "labor cost")?),
            speed: MetersPerHour(positive(self.travel_speed_m_per_h, "welding speed")?),
        })
    }
}

/// Computed consumption and cost figures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillerCostBreakdown {
    /// Filler metal to purchase, losses included.
    pub filler_mass: Kilograms,
    /// Filler metal cost.
    pub filler_cost: Money,
    /// Shielding gas cost.
    pub gas_cost: Money,
    /// Arc time needed for the weld.
    pub weld_time: Hours,
    /// Labour cost.
    pub labor_cost: Money,
    /// Sum of filler, gas and labour cost.
    pub total_cost: Money,
}

/// Outcome of a filler cost calculation.
#[derive(Clone, Debug, PartialEq)]
pub enum FillerCostResult {
    /// All figures computed.
    Computed(FillerCostBreakdown),
    /// Input rejected; every figure is "N/A".
    NotApplicable {
        /// Explanation of the rejected input.
        note: String,
    },
}

/// Display-ready filler cost figures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillerCostReport {
    /// Required filler mass, e.g. `0.462 kg`.
    pub filler_mass: String,
    /// Filler cost, e.g. `€2.31`.
    pub filler_cost: String,
    /// Gas cost.
    pub gas_cost: String,
    /// Labour cost.
    pub labor_cost: String,
    /// Total cost.
    pub total_cost: String,
    /// Advisory or error note.
    pub note: String,
}

impl FillerCostResult {
    /// Computed figures, if the input was valid.
    #[must_use]
    pub fn breakdown(&self) -> Option<&FillerCostBreakdown> {
        match self {
            Self::Computed(breakdown) => Some(breakdown),
            Self::NotApplicable { .. } => None,
        }
    }

    /// Format every figure for display.
    #[must_use]
    pub fn report(&self, format: &CostFormat) -> FillerCostReport {
        match self {
            Self::Computed(b) => FillerCostReport {
                filler_mass: b.filler_mass.to_string(),
                filler_cost: format.money(b.filler_cost),
                gas_cost: format.money(b.gas_cost),
                labor_cost: format.money(b.labor_cost),
                total_cost: format.money(b.total_cost),
                note: COMPUTED_NOTE.to_owned(),
            },
            Self::NotApplicable { note } => FillerCostReport {
                filler_mass: NOT_APPLICABLE.to_owned(),
                filler_cost: NOT_APPLICABLE.to_owned(),
                gas_cost: NOT_APPLICABLE.to_owned(),
                labor_cost: NOT_APPLICABLE.to_owned(),
                total_cost: NOT_APPLICABLE.to_owned(),
                note: note.clone(),
            },
        }
    }
}

/// Estimate filler metal consumption and weld cost.
///
/// Any invalid field yields [`FillerCostResult::NotApplicable`]; nothing is
/// partially computed.
///
/// # Examples
///
/// ```
/// use weldify_calc::{CostFormat, FillerCostInput, compute_filler_cost};
///
/// let result = compute_filler_cost(&FillerCostInput {
///     weld_length_m: 1.0,
///     cross_section_mm2: 50.0,
///     density_g_cm3: 7.85,
///     deposition_efficiency_pct: 85.0,
///     filler_cost_per_kg: 5.0,
///     gas_cost_per_m: None,
///     labor_cost_per_hour: 30.0,
///     travel_speed_m_per_h: 2.0,
/// });
/// let report = result.report(&CostFormat::default());
/// assert_eq!(report.total_cost, "€17.31");
/// ```
pub fn compute_filler_cost(input: &FillerCostInput) -> FillerCostResult {
    match input.validate() {
        Ok(valid) => FillerCostResult::Computed(breakdown(&valid)),
        Err(err) => FillerCostResult::NotApplicable {
            note: format!("{err}. {INVALID_HINT}"),
        },
    }
}

fn breakdown(input: &ValidatedInput) -> FillerCostBreakdown {
    let weld_volume = input.area.to_square_centimeters() * input.length.to_centimeters();
    let deposited = (weld_volume * input.density).to_kilograms();
    let filler_mass = deposited.before_losses(input.efficiency);
    let filler_cost = filler_mass * input.filler_price;

    let weld_time = input.length / input.speed;
    let labor_cost = weld_time * input.labor_rate;
    let gas_cost = input.length * input.gas_price;

    FillerCostBreakdown {
        filler_mass,
        filler_cost,
        gas_cost,
        weld_time,
        labor_cost,
        total_cost: filler_cost + labor_cost + gas_cost,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reference_input() -> FillerCostInput {
        FillerCostInput {
            weld_length_m: 1.0,
            cross_section_mm2: 50.0,
            density_g_cm3: 7.85,
            deposition_efficiency_pct: 85.0,
            filler_cost_per_kg: 5.0,
            gas_cost_per_m: None,
            labor_cost_per_hour: 30.0,
            travel_speed_m_per_h: 2.0,
        }
    }

    #[test]
    fn test_reference_case() {
        let result = compute_filler_cost(&reference_input());
        let b = result.breakdown().unwrap();
        assert!((b.filler_mass.value() - 0.461_764_7).abs() < 1e-6);
        assert!((b.filler_cost.value() - 2.308_823_5).abs() < 1e-6);
        assert!((b.labor_cost.value() - 15.0).abs() < 1e-9);
        assert!(b.gas_cost.value().abs() < 1e-12);
        assert!((b.weld_time.value() - 0.5).abs() < 1e-12);

        let report = result.report(&CostFormat::default());
        assert_eq!(report.filler_mass, "0.462 kg");
        assert_eq!(report.filler_cost, "€2.31");
        assert_eq!(report.gas_cost, "€0.00");
        assert_eq!(report.labor_cost, "€15.00");
        assert_eq!(report.total_cost, "€17.31");
    }

    #[test]
    fn test_gas_cost_added() {
        let input = FillerCostInput {
            weld_length_m: 2.0,
            gas_cost_per_m: Some(0.5),
            ..reference_input()
        };
        let b = *compute_filler_cost(&input).breakdown().unwrap();
        assert!((b.gas_cost.value() - 1.0).abs() < 1e-12);
        let sum = b.filler_cost.value() + b.labor_cost.value() + b.gas_cost.value();
        assert!((b.total_cost.value() - sum).abs() < 1e-12);
    }

    #[test]
    fn test_zero_efficiency_is_not_applicable() {
        let input = FillerCostInput {
            deposition_efficiency_pct: 0.0,
            ..reference_input()
        };
        let result = compute_filler_cost(&input);
        assert!(result.breakdown().is_none());

        let report = result.report(&CostFormat::default());
        assert_eq!(report.filler_mass, "N/A");
        assert_eq!(report.filler_cost, "N/A");
        assert_eq!(report.gas_cost, "N/A");
        assert_eq!(report.labor_cost, "N/A");
        assert_eq!(report.total_cost, "N/A");
        assert!(report.note.contains("deposition efficiency"));
    }

    #[test]
    fn test_efficiency_above_hundred() {
        let input = FillerCostInput {
            deposition_efficiency_pct: 100.5,
            ..reference_input()
        };
        assert!(compute_filler_cost(&input).breakdown().is_none());
    }

    #[test]
    fn test_full_efficiency_allowed() {
        let input = FillerCostInput {
            deposition_efficiency_pct: 100.0,
            ..reference_input()
        };
        let b = *compute_filler_cost(&input).breakdown().unwrap();
        assert!((b.filler_mass.value() - 0.3925).abs() < 1e-9);
    }

    #[test]
    fn test_zero_speed_rejected() {
        let input = FillerCostInput {
            travel_speed_m_per_h: 0.0,
            ..reference_input()
        };
        let result = compute_filler_cost(&input);
        assert!(result.report(&CostFormat::default()).note.contains("welding speed"));
    }

    #[test]
    fn test_negative_gas_cost_rejected() {
        let input = FillerCostInput {
            gas_cost_per_m: Some(-0.1),
            ..reference_input()
        };
        assert!(compute_filler_cost(&input).breakdown().is_none());
    }

    #[test]
    fn test_zero_prices_allowed() {
        let input = FillerCostInput {
            filler_cost_per_kg: 0.0,
            labor_cost_per_hour: 0.0,
            ..reference_input()
        };
        let report = compute_filler_cost(&input).report(&CostFormat::default());
        assert_eq!(report.total_cost, "€0.00");
    }

    #[test]
    fn test_custom_currency() {
        let report = compute_filler_cost(&reference_input()).report(&CostFormat::new("$"));
        assert_eq!(report.labor_cost, "$15.00");
    }
}
