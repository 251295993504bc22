//! CLI command implementations.

pub(crate) mod ask;
pub(crate) mod calc;
pub(crate) mod checklist;
pub(crate) mod jobs;
pub(crate) mod render;
pub(crate) mod trace;

use std::path::PathBuf;

use clap::Args;
use weldify_calc::{MaterialType, WeldingParameters, WeldingProcess};
use weldify_config::{CliSettings, Config};
use weldify_storage::FsStore;

use crate::error::CliError;

pub(crate) use ask::AskCommand;
pub(crate) use calc::CalcCommand;
pub(crate) use checklist::ChecklistCommand;
pub(crate) use jobs::JobsCommand;
pub(crate) use render::RenderArgs;
pub(crate) use trace::TraceCommand;

/// Global options shared by every command.
pub(crate) struct Context {
    pub(crate) config_path: Option<PathBuf>,
    pub(crate) data_dir: Option<PathBuf>,
}

impl Context {
    /// Load configuration, applying global overrides plus `settings`.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            data_dir: settings.data_dir.or_else(|| self.data_dir.clone()),
            ..settings
        };
        let config = Config::load(self.config_path.as_deref(), Some(&settings))?;
        match &config.config_path {
            Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
            None => tracing::info!("No weldify.toml found, using defaults"),
        }
        Ok(config)
    }

    /// Open the record store in the configured data directory.
    pub(crate) fn open_store(&self) -> Result<FsStore, CliError> {
        let config = self.load_config(CliSettings::default())?;
        let store = FsStore::new(config.storage_resolved.data_dir);
        tracing::info!("Using data directory {}", store.root().display());
        Ok(store)
    }
}

/// Welding setup flags shared by `ask params` and `jobs add`.
#[derive(Args, Default)]
pub(crate) struct ParamsArgs {
    /// Welding process (smaw, gmaw, fcaw, gtaw, saw, paw, lbw, oaw).
    #[arg(long)]
    process: Option<WeldingProcess>,

    /// Base material (carbon_steel, stainless_steel, aluminum, titanium,
    /// cast_iron, copper_alloys, nickel_alloys).
    #[arg(long)]
    material: Option<MaterialType>,

    /// Plate thickness (mm).
    #[arg(long)]
    thickness: Option<f64>,

    /// Joint type (e.g. butt, fillet, lap).
    #[arg(long)]
    joint: Option<String>,

    /// Electrode designation (e.g. E6013).
    #[arg(long)]
    electrode: Option<String>,

    /// Electrode diameter (mm).
    #[arg(long)]
    electrode_diameter: Option<f64>,

    /// Wire diameter (mm).
    #[arg(long)]
    wire_diameter: Option<f64>,

    /// Arc voltage (V).
    #[arg(long)]
    voltage: Option<f64>,

    /// Welding current (A).
    #[arg(long)]
    amperage: Option<f64>,

    /// Wire feed speed (m/min).
    #[arg(long)]
    wire_speed: Option<f64>,

    /// Shielding gas.
    #[arg(long)]
    gas: Option<String>,

    /// Gas flow rate (L/min).
    #[arg(long)]
    gas_flow: Option<f64>,

    /// Polarity (DCEN, DCEP, AC).
    #[arg(long)]
    polarity: Option<String>,

    /// Travel speed (mm/min).
    #[arg(long)]
    travel_speed: Option<f64>,
}

impl From<ParamsArgs> for WeldingParameters {
    fn from(args: ParamsArgs) -> Self {
        Self {
            process: args.process,
            material: args.material,
            thickness: args.thickness,
            joint_type: args.joint,
            electrode_type: args.electrode,
            electrode_diameter: args.electrode_diameter,
            wire_diameter: args.wire_diameter,
            voltage: args.voltage,
            amperage: args.amperage,
            wire_speed: args.wire_speed,
            gas_type: args.gas,
            gas_flow_rate: args.gas_flow,
            polarity: args.polarity,
            travel_speed: args.travel_speed,
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
        params: ParamsArgs,
    }

    #[test]
    fn test_params_parse() {
        let harness = Harness::parse_from([
            "weldify",
            "--process",
            "gmaw",
            "--material",
            "stainless-steel",
            "--thickness",
            "2",
            "--wire-diameter",
            "0.8",
        ]);
        let params = WeldingParameters::from(harness.params);

        assert_eq!(params.process, Some(WeldingProcess::Gmaw));
        assert_eq!(params.material, Some(MaterialType::StainlessSteel));
        assert_eq!(params.thickness, Some(2.0));
        assert_eq!(params.wire_diameter, Some(0.8));
        assert_eq!(params.gas_type, None);
    }

    #[test]
    fn test_unknown_process_rejected() {
        assert!(Harness::try_parse_from(["weldify", "--process", "mig"]).is_err());
    }
}
