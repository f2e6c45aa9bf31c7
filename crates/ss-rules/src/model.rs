//! Input records and the enumerations the selection tables are keyed on.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use ss_core::numeric::Real;
use ss_core::units::{Pressure, Temperature, Velocity, as_bar_g, as_degc, as_mps, bar_g, degc, mps};
use std::fmt;

/// Service-severity tier. Each tier bounds pressure, temperature and shaft speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Category {
    One,
    Two,
    Three,
}

impl Category {
    /// Ascending order; classification relies on it.
    pub const ALL: [Category; 3] = [Category::One, Category::Two, Category::Three];

    pub fn number(self) -> u8 {
        match self {
            Category::One => 1,
            Category::Two => 2,
            Category::Three => 3,
        }
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> Self {
        c.number()
    }
}

impl TryFrom<u8> for Category {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Category::One),
            2 => Ok(Category::Two),
            3 => Ok(Category::Three),
            _ => Err(RuleError::OutOfRange {
                kind: "category",
                value,
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category {}", self.number())
    }
}

impl std::str::FromStr for Category {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let digits = lowered.strip_prefix("category").unwrap_or(&lowered).trim();
        digits
            .parse::<u8>()
            .map_err(|_| RuleError::UnknownName {
                kind: "category",
                value: s.to_string(),
            })
            .and_then(Category::try_from)
    }
}

/// Seal configuration: 1 single, 2 tandem, 3 double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Arrangement {
    One,
    Two,
    Three,
}

impl Arrangement {
    pub const ALL: [Arrangement; 3] = [Arrangement::One, Arrangement::Two, Arrangement::Three];

    pub fn number(self) -> u8 {
        match self {
            Arrangement::One => 1,
            Arrangement::Two => 2,
            Arrangement::Three => 3,
        }
    }

    /// Arrangements 2 and 3 circulate a buffer or barrier fluid.
    pub fn uses_auxiliary_fluid(self) -> bool {
        matches!(self, Arrangement::Two | Arrangement::Three)
    }
}

impl From<Arrangement> for u8 {
    fn from(a: Arrangement) -> Self {
        a.number()
    }
}

impl TryFrom<u8> for Arrangement {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Arrangement::One),
            2 => Ok(Arrangement::Two),
            3 => Ok(Arrangement::Three),
            _ => Err(RuleError::OutOfRange {
                kind: "arrangement",
                value,
            }),
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arrangement {}", self.number())
    }
}

impl std::str::FromStr for Arrangement {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let digits = lowered.strip_prefix("arrangement").unwrap_or(&lowered).trim();
        digits
            .parse::<u8>()
            .map_err(|_| RuleError::UnknownName {
                kind: "arrangement",
                value: s.to_string(),
            })
            .and_then(Arrangement::try_from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FluidType {
    #[default]
    Hydrocarbon,
    Nonhydrocarbon,
}

impl FluidType {
    pub fn is_hydrocarbon(self) -> bool {
        matches!(self, FluidType::Hydrocarbon)
    }
}

impl fmt::Display for FluidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluidType::Hydrocarbon => write!(f, "Hydrocarbon"),
            FluidType::Nonhydrocarbon => write!(f, "Nonhydrocarbon"),
        }
    }
}

impl std::str::FromStr for FluidType {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "hydrocarbon" | "hc" => Ok(FluidType::Hydrocarbon),
            "nonhydrocarbon" | "nhc" => Ok(FluidType::Nonhydrocarbon),
            _ => Err(RuleError::UnknownName {
                kind: "fluid type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluidGroup {
    FlashingHydrocarbon,
    NonflashingHydrocarbon,
    Nonhydrocarbon,
}

impl fmt::Display for FluidGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluidGroup::FlashingHydrocarbon => write!(f, "Flashing Hydrocarbon"),
            FluidGroup::NonflashingHydrocarbon => write!(f, "Nonflashing Hydrocarbon"),
            FluidGroup::Nonhydrocarbon => write!(f, "Nonhydrocarbon"),
        }
    }
}

impl std::str::FromStr for FluidGroup {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "flashinghydrocarbon" | "flashing" => Ok(FluidGroup::FlashingHydrocarbon),
            "nonflashinghydrocarbon" | "nonflashing" => Ok(FluidGroup::NonflashingHydrocarbon),
            "nonhydrocarbon" => Ok(FluidGroup::Nonhydrocarbon),
            _ => Err(RuleError::UnknownName {
                kind: "fluid group",
                value: s.to_string(),
            }),
        }
    }
}

/// Mechanical seal design class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SealType {
    TypeA,
    TypeB,
    TypeC,
    EngineeredSystem,
}

impl fmt::Display for SealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SealType::TypeA => write!(f, "Type A"),
            SealType::TypeB => write!(f, "Type B"),
            SealType::TypeC => write!(f, "Type C"),
            SealType::EngineeredSystem => write!(f, "Engineered System"),
        }
    }
}

impl std::str::FromStr for SealType {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let name = lowered.strip_prefix("type").unwrap_or(&lowered).trim();
        match name {
            "a" => Ok(SealType::TypeA),
            "b" => Ok(SealType::TypeB),
            "c" => Ok(SealType::TypeC),
            "engineered" | "engineered system" | "engineeredsystem" | "es" => {
                Ok(SealType::EngineeredSystem)
            }
            _ => Err(RuleError::UnknownName {
                kind: "seal type",
                value: s.to_string(),
            }),
        }
    }
}

/// Seal chamber conditions, held in the units the selection tables use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Seal chamber pressure (bar gauge)
    pub pressure_bar_g: Real,
    /// Pumping temperature (°C)
    pub temperature_c: Real,
    /// Shaft surface speed (m/s)
    pub speed_mps: Real,
}

impl OperatingConditions {
    pub fn new(pressure_bar_g: Real, temperature_c: Real, speed_mps: Real) -> Self {
        Self {
            pressure_bar_g,
            temperature_c,
            speed_mps,
        }
    }

    /// Build from SI quantities. The pressure is taken as gauge.
    pub fn from_quantities(pressure: Pressure, temperature: Temperature, speed: Velocity) -> Self {
        Self::new(as_bar_g(pressure), as_degc(temperature), as_mps(speed))
    }

    pub fn pressure(&self) -> Pressure {
        bar_g(self.pressure_bar_g)
    }

    pub fn temperature(&self) -> Temperature {
        degc(self.temperature_c)
    }

    pub fn speed(&self) -> Velocity {
        mps(self.speed_mps)
    }
}

/// Contaminants present in the pumped fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contaminants {
    pub caustic: bool,
    pub h2s: bool,
    pub amines: bool,
    pub ammonia: bool,
    /// Abrasive particles / solids in suspension
    pub abrasive: bool,
}

impl Contaminants {
    pub fn any(&self) -> bool {
        self.caustic || self.h2s || self.amines || self.ammonia || self.abrasive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FluidProperties {
    pub fluid_type: FluidType,
    pub flashing: bool,
    // Hazard classification. Recorded with the case; no rule reads these.
    pub hazardous: bool,
    pub toxic: bool,
    pub flammable: bool,
    pub polymerizing: bool,
    pub poor_lubricity: bool,
    pub contaminants: Contaminants,
}

impl FluidProperties {
    pub fn solids_present(&self) -> bool {
        self.contaminants.abrasive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentalFactors {
    /// Personnel exposure hazard
    pub exposure_hazard: bool,
    /// Vapour cloud risk
    pub vapor_risk: bool,
    /// Environmental emission limits apply
    pub environmental_limits: bool,
    /// Zero emission requirement
    pub zero_leakage: bool,
    /// Relative density below 0.4
    pub low_density: bool,
    /// Vapour pressure above 0.414 kPa at 38 °C
    pub high_vapor_pressure: bool,
    /// Explicit override; wins over every other rule.
    pub mandated_arrangement: Option<Arrangement>,
}

/// Everything one evaluation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionInput {
    pub operating: OperatingConditions,
    pub fluid: FluidProperties,
    pub environment: EnvironmentalFactors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrangement_parses_common_forms() {
        assert_eq!("2".parse::<Arrangement>().unwrap(), Arrangement::Two);
        assert_eq!(
            "Arrangement 3".parse::<Arrangement>().unwrap(),
            Arrangement::Three
        );
        assert!(matches!(
            "4".parse::<Arrangement>(),
            Err(RuleError::OutOfRange { value: 4, .. })
        ));
        assert!(matches!(
            "tandem".parse::<Arrangement>(),
            Err(RuleError::UnknownName { .. })
        ));
    }

    #[test]
    fn fluid_type_parses_case_insensitively() {
        assert_eq!(
            "hydrocarbon".parse::<FluidType>().unwrap(),
            FluidType::Hydrocarbon
        );
        assert_eq!(
            "Non-Hydrocarbon".parse::<FluidType>().unwrap(),
            FluidType::Nonhydrocarbon
        );
        assert!("water".parse::<FluidType>().is_err());
    }

    #[test]
    fn seal_type_display_and_parse() {
        for t in [
            SealType::TypeA,
            SealType::TypeB,
            SealType::TypeC,
            SealType::EngineeredSystem,
        ] {
            assert_eq!(t.to_string().parse::<SealType>().unwrap(), t);
        }
        assert_eq!("A".parse::<SealType>().unwrap(), SealType::TypeA);
    }

    #[test]
    fn category_parses_number_and_label() {
        assert_eq!("1".parse::<Category>().unwrap(), Category::One);
        assert_eq!("category 3".parse::<Category>().unwrap(), Category::Three);
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
        assert!(matches!(
            "0".parse::<Category>(),
            Err(RuleError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            "severe".parse::<Category>(),
            Err(RuleError::UnknownName { .. })
        ));
    }

    #[test]
    fn fluid_group_display_and_parse() {
        for g in [
            FluidGroup::FlashingHydrocarbon,
            FluidGroup::NonflashingHydrocarbon,
            FluidGroup::Nonhydrocarbon,
        ] {
            assert_eq!(g.to_string().parse::<FluidGroup>().unwrap(), g);
        }
        assert_eq!(
            "flashing hydrocarbon".parse::<FluidGroup>().unwrap(),
            FluidGroup::FlashingHydrocarbon
        );
        assert_eq!(
            "Non-flashing".parse::<FluidGroup>().unwrap(),
            FluidGroup::NonflashingHydrocarbon
        );
        assert!("steam".parse::<FluidGroup>().is_err());
    }

    #[test]
    fn category_numbers_serialize_as_integers() {
        let json = serde_json::to_string(&Category::Two).unwrap();
        assert_eq!(json, "2");
        assert!(serde_json::from_str::<Category>("4").is_err());
    }

    #[test]
    fn solids_follow_the_abrasive_flag() {
        let mut fluid = FluidProperties::default();
        assert!(!fluid.solids_present());
        fluid.contaminants.abrasive = true;
        assert!(fluid.solids_present());
        assert!(fluid.contaminants.any());
    }

    #[test]
    fn operating_conditions_quantities() {
        let op = OperatingConditions::new(15.0, 100.0, 10.0);
        let back = OperatingConditions::from_quantities(op.pressure(), op.temperature(), op.speed());
        assert!((back.pressure_bar_g - 15.0).abs() < 1e-9);
        assert!((back.temperature_c - 100.0).abs() < 1e-9);
        assert!((back.speed_mps - 10.0).abs() < 1e-9);
    }
}
