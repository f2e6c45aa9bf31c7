//! Case file schema definitions.
//!
//! Plain data mirroring the file layout. Numbers carry their unit in the
//! field name; enumerations are kept as text/integers here and checked by
//! [`crate::validate`].

use serde::{Deserialize, Serialize};

/// A case file: one or more seal selection cases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

impl Study {
    pub fn find_case(&self, id: &str) -> Option<&CaseDef> {
        self.cases.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub operating: OperatingDef,
    pub fluid: FluidDef,
    #[serde(default)]
    pub environment: EnvironmentDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OperatingDef {
    pub pressure_bar_g: f64,
    pub temperature_c: f64,
    pub speed_mps: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    /// "Hydrocarbon" or "Nonhydrocarbon"
    pub fluid_type: String,
    #[serde(default)]
    pub flashing: bool,
    #[serde(default)]
    pub hazardous: bool,
    #[serde(default)]
    pub toxic: bool,
    #[serde(default)]
    pub flammable: bool,
    #[serde(default)]
    pub polymerizing: bool,
    #[serde(default)]
    pub poor_lubricity: bool,
    #[serde(default)]
    pub contaminants: ContaminantsDef,
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            fluid_type: "Hydrocarbon".to_string(),
            flashing: false,
            hazardous: false,
            toxic: false,
            flammable: false,
            polymerizing: false,
            poor_lubricity: false,
            contaminants: ContaminantsDef::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ContaminantsDef {
    #[serde(default)]
    pub caustic: bool,
    #[serde(default)]
    pub h2s: bool,
    #[serde(default)]
    pub amines: bool,
    #[serde(default)]
    pub ammonia: bool,
    #[serde(default)]
    pub abrasive: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct EnvironmentDef {
    #[serde(default)]
    pub exposure_hazard: bool,
    #[serde(default)]
    pub vapor_risk: bool,
    #[serde(default)]
    pub environmental_limits: bool,
    #[serde(default)]
    pub zero_leakage: bool,
    #[serde(default)]
    pub low_density: bool,
    #[serde(default)]
    pub high_vapor_pressure: bool,
    /// 1, 2 or 3 when an arrangement is mandated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandated_arrangement: Option<u8>,
}
