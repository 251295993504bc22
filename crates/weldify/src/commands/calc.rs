//! `weldify calc` command implementations.

use clap::{Args, Subcommand};
use weldify_calc::{
    CoolingInput, CoolingResult, CostFormat, FillerCostInput, JointForm, JointGeometryResult,
    MaterialType, compute_filler_cost, compute_joint_geometry_form, estimate_cooling,
};
use weldify_config::CliSettings;

use super::Context;
use crate::error::CliError;
use crate::output::Output;

/// Calculator subcommands.
#[derive(Subcommand)]
pub(crate) enum CalcCommand {
    /// Weld cross-section, volume and mass per metre of a joint.
    Joint(JointArgs),
    /// Filler metal consumption and weld cost.
    Filler(FillerArgs),
    /// Rough post-weld cooling time.
    Cooling(CoolingArgs),
}

impl CalcCommand {
    /// Execute the calc command.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        match self {
            Self::Joint(args) => args.execute(ctx),
            Self::Filler(args) => args.execute(ctx),
            Self::Cooling(args) => args.execute(),
        }
    }
}

/// Arguments for the joint calculator.
#[derive(Args)]
pub(crate) struct JointArgs {
    /// Joint kind: butt-v, butt-square or fillet.
    #[arg(long)]
    kind: String,

    /// Plate thickness (mm).
    #[arg(long, default_value_t = 0.0)]
    thickness: f64,

    /// Total groove angle (degrees), V-groove only.
    #[arg(long, default_value_t = 0.0)]
    angle: f64,

    /// Root opening (mm).
    #[arg(long, default_value_t = 0.0)]
    root_opening: f64,

    /// Fillet leg length (mm).
    #[arg(long, default_value_t = 0.0)]
    leg: f64,

    /// Weld metal density (g/cm³) (default from config).
    #[arg(long)]
    density: Option<f64>,
}

impl JointArgs {
    fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let output = Output::new();
        let config = ctx.load_config(CliSettings::default())?;
        let result =
            compute_joint_geometry_form(&self.into_form(config.calculators.default_density));

        match &result {
            JointGeometryResult::Computed(geometry) => {
                output.result(&format!("Cross-sectional area: {}", geometry.area));
                output.result(&format!("Volume per metre:     {}", geometry.volume_per_meter));
                output.result(&format!("Mass per metre:       {}", geometry.mass_per_meter));
                output.detail(&geometry.note);
                Ok(())
            }
            JointGeometryResult::Invalid { note } => Err(CliError::Validation(note.clone())),
        }
    }

    /// Calculator form, with `--density` falling back to `default_density`.
    fn into_form(self, default_density: f64) -> JointForm {
        JointForm {
            kind: self.kind,
            thickness_mm: self.thickness,
            groove_angle_deg: self.angle,
            root_opening_mm: self.root_opening,
            leg_mm: self.leg,
            density_g_cm3: Some(self.density.unwrap_or(default_density)),
        }
    }
}

/// Arguments for the filler cost calculator.
#[derive(Args)]
pub(crate) struct FillerArgs {
    /// Weld length (m).
    #[arg(long)]
    length: f64,

    /// Weld cross-sectional area (mm²), e.g. from `calc joint`.
    #[arg(long)]
    area: f64,

    /// Weld metal density (g/cm³) (default from config).
    #[arg(long)]
    density: Option<f64>,

    /// Deposition efficiency (%) (default from config).
    #[arg(long)]
    efficiency: Option<f64>,

    /// Filler metal price per kg.
    #[arg(long)]
    filler_cost: f64,

    /// Shielding gas cost per metre of weld.
    #[arg(long)]
    gas_cost: Option<f64>,

    /// Labour cost per hour.
    #[arg(long)]
    labor_cost: f64,

    /// Travel speed (m/h).
    #[arg(long)]
    speed: f64,

    /// Currency prefix (overrides config).
    #[arg(long)]
    currency: Option<String>,
}

impl FillerArgs {
    fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let output = Output::new();
        let config = ctx.load_config(CliSettings {
            currency: self.currency,
            ..Default::default()
        })?;
        let defaults = &config.calculators;

        let result = compute_filler_cost(&FillerCostInput {
            weld_length_m: self.length,
            cross_section_mm2: self.area,
            density_g_cm3: self.density.unwrap_or(defaults.default_density),
            deposition_efficiency_pct: self.efficiency.unwrap_or(defaults.default_efficiency),
            filler_cost_per_kg: self.filler_cost,
            gas_cost_per_m: self.gas_cost,
            labor_cost_per_hour: self.labor_cost,
            travel_speed_m_per_h: self.speed,
        });
        let report = result.report(&CostFormat::new(defaults.currency.clone()));

        output.result(&format!("Filler metal required: {}", report.filler_mass));
        output.result(&format!("Filler metal cost:     {}", report.filler_cost));
        output.result(&format!("Gas cost:              {}", report.gas_cost));
        output.result(&format!("Labour cost:           {}", report.labor_cost));
        output.result(&format!("Total weld cost:       {}", report.total_cost));
        if result.breakdown().is_none() {
            return Err(CliError::Validation(report.note));
        }
        output.detail(&report.note);
        Ok(())
    }
}

/// Arguments for the cooling estimate.
#[derive(Args)]
pub(crate) struct CoolingArgs {
    /// Base material.
    #[arg(long, default_value = "carbon_steel")]
    material: MaterialType,

    /// Plate thickness (mm).
    #[arg(long)]
    thickness: f64,

    /// Ambient temperature (°C).
    #[arg(long, default_value_t = 20.0)]
    ambient: f64,
}

impl CoolingArgs {
    fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let result = estimate_cooling(&CoolingInput {
            material: self.material,
            thickness_mm: self.thickness,
            ambient_c: self.ambient,
        });

        match &result {
            CoolingResult::Estimated(estimate) => {
                output.result(&format!("Estimated cooling time: {}", estimate.range()));
                output.detail(&estimate.note);
                Ok(())
            }
            CoolingResult::Invalid { note } => Err(CliError::Validation(note.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        joint: JointArgs,
    }

    fn joint_args(args: &[&str]) -> JointArgs {
        let argv = std::iter::once("weldify").chain(args.iter().copied());
        Harness::parse_from(argv).joint
    }

    #[test]
    fn test_joint_density_defaults_from_config() {
        let form = joint_args(&["--kind", "fillet", "--leg", "10"]).into_form(2.70);
        assert_eq!(form.density_g_cm3, Some(2.70));
    }

    #[test]
    fn test_joint_density_flag_overrides_config() {
        let form =
            joint_args(&["--kind", "fillet", "--leg", "10", "--density", "8.0"]).into_form(2.70);
        assert_eq!(form.density_g_cm3, Some(8.0));
        assert_eq!(form.leg_mm, 10.0);
    }

    #[test]
    fn test_joint_mass_uses_config_density() {
        let form = joint_args(&["--kind", "fillet", "--leg", "10"]).into_form(2.70);
        let result = compute_joint_geometry_form(&form);
        let JointGeometryResult::Computed(geometry) = result else {
            panic!("expected a computed geometry");
        };
        assert_eq!(geometry.mass_per_meter.to_string(), "0.135 kg/m");
    }
}
