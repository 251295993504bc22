//! Welding vocabulary shared by the calculators, assistant prompts and job log.

use std::fmt;
use std::str::FromStr;

/// Arc and beam welding processes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeldingProcess {
    /// Shielded metal arc (stick).
    Smaw,
    /// Gas metal arc (MIG/MAG).
    Gmaw,
    /// Flux-cored arc.
    Fcaw,
    /// Gas tungsten arc (TIG).
    Gtaw,
    /// Submerged arc.
    Saw,
    /// Plasma arc.
    Paw,
    /// Laser beam.
    Lbw,
    /// Oxy-fuel.
    Oaw,
}

impl WeldingProcess {
    /// All processes, in menu order.
    pub const ALL: [Self; 8] = [
        Self::Smaw,
        Self::Gmaw,
        Self::Fcaw,
        Self::Gtaw,
        Self::Saw,
        Self::Paw,
        Self::Lbw,
        Self::Oaw,
    ];

    /// Short identifier (`smaw`, `gmaw`, ...).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Smaw => "smaw",
            Self::Gmaw => "gmaw",
            Self::Fcaw => "fcaw",
            Self::Gtaw => "gtaw",
            Self::Saw => "saw",
            Self::Paw => "paw",
            Self::Lbw => "lbw",
            Self::Oaw => "oaw",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Smaw => "SMAW (Stick / MMA)",
            Self::Gmaw => "GMAW (MIG/MAG)",
            Self::Fcaw => "FCAW (Flux-Cored Arc Welding)",
            Self::Gtaw => "GTAW (TIG)",
            Self::Saw => "SAW (Submerged Arc)",
            Self::Paw => "PAW (Plasma Arc)",
            Self::Lbw => "LBW (Laser Beam)",
            Self::Oaw => "OAW (Oxy-Fuel)",
        }
    }
}

impl fmt::Display for WeldingProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WeldingProcess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == needle)
            .ok_or_else(|| format!("unknown welding process '{s}'"))
    }
}

/// Base material families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MaterialType {
    /// Carbon steel.
    CarbonSteel,
    /// Stainless steel.
    StainlessSteel,
    /// Aluminium and its alloys.
    Aluminum,
    /// Titanium.
    Titanium,
    /// Cast iron.
    CastIron,
    /// Copper alloys.
    CopperAlloys,
    /// Nickel alloys.
    NickelAlloys,
}

impl MaterialType {
    /// All materials, in menu order.
    pub const ALL: [Self; 7] = [
        Self::CarbonSteel,
        Self::StainlessSteel,
        Self::Aluminum,
        Self::Titanium,
        Self::CastIron,
        Self::CopperAlloys,
        Self::NickelAlloys,
    ];

    /// Short identifier (`carbon_steel`, ...).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::CarbonSteel => "carbon_steel",
            Self::StainlessSteel => "stainless_steel",
            Self::Aluminum => "aluminum",
            Self::Titanium => "titanium",
            Self::CastIron => "cast_iron",
            Self::CopperAlloys => "copper_alloys",
            Self::NickelAlloys => "nickel_alloys",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::CarbonSteel => "Carbon steel",
            Self::StainlessSteel => "Stainless steel",
            Self::Aluminum => "Aluminium",
            Self::Titanium => "Titanium",
            Self::CastIron => "Cast iron",
            Self::CopperAlloys => "Copper alloys",
            Self::NickelAlloys => "Nickel alloys",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.code() == needle)
            .ok_or_else(|| format!("unknown material '{s}'"))
    }
}

/// Machine setup for a weld. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WeldingParameters {
    /// Welding process.
    pub process: Option<WeldingProcess>,
    /// Base material.
    pub material: Option<MaterialType>,
    /// Plate thickness (mm).
    pub thickness: Option<f64>,
    /// Joint type, free text (e.g. "Butt", "Fillet", "Lap").
    pub joint_type: Option<String>,
    /// Electrode designation (e.g. E6013).
    pub electrode_type: Option<String>,
    /// Electrode diameter (mm).
    pub electrode_diameter: Option<f64>,
    /// Wire diameter (mm).
    pub wire_diameter: Option<f64>,
    /// Arc voltage (V).
    pub voltage: Option<f64>,
    /// Welding current (A).
    pub amperage: Option<f64>,
    /// Wire feed speed (m/min).
    pub wire_speed: Option<f64>,
    /// Shielding gas.
    pub gas_type: Option<String>,
    /// Gas flow (L/min).
    pub gas_flow_rate: Option<f64>,
    /// Polarity (DCEN, DCEP, AC).
    pub polarity: Option<String>,
    /// Travel speed (mm/min).
    pub travel_speed: Option<f64>,
}

impl WeldingParameters {
    /// One-line summary, e.g. `GMAW (MIG/MAG), Carbon steel, 3 mm, 120 A, 20 V`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(process) = self.process {
            parts.push(process.display_name().to_owned());
        }
        if let Some(material) = self.material {
            parts.push(material.display_name().to_owned());
        }
        if let Some(thickness) = self.thickness {
            parts.push(format!("{thickness} mm"));
        }
        if let Some(joint) = &self.joint_type {
            parts.push(joint.clone());
        }
        if let Some(amperage) = self.amperage {
            parts.push(format!("{amperage} A"));
        }
        if let Some(voltage) = self.voltage {
            parts.push(format!("{voltage} V"));
        }
        if parts.is_empty() {
            "N/A".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_process_parse() {
        assert_eq!("GMAW".parse::<WeldingProcess>(), Ok(WeldingProcess::Gmaw));
        assert!("mig".parse::<WeldingProcess>().is_err());
    }

    #[test]
    fn test_material_parse() {
        assert_eq!(
            "stainless-steel".parse::<MaterialType>(),
            Ok(MaterialType::StainlessSteel)
        );
        assert!("wood".parse::<MaterialType>().is_err());
    }

    #[test]
    fn test_codes_round_trip_through_parse() {
        for process in WeldingProcess::ALL {
            assert_eq!(process.code().parse::<WeldingProcess>(), Ok(process));
        }
        for material in MaterialType::ALL {
            assert_eq!(material.code().parse::<MaterialType>(), Ok(material));
        }
    }

    #[test]
    fn test_summary() {
        let params = WeldingParameters {
            process: Some(WeldingProcess::Gmaw),
            material: Some(MaterialType::CarbonSteel),
            thickness: Some(3.0),
            amperage: Some(120.0),
            voltage: Some(20.0),
            ..Default::default()
        };
        assert_eq!(
            params.summary(),
            "GMAW (MIG/MAG), Carbon steel, 3 mm, 120 A, 20 V"
        );
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(WeldingParameters::default().summary(), "N/A");
    }
}
