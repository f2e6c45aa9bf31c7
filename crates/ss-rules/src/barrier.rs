//! Barrier / buffer fluid recommendation for arrangements 2 and 3.

use crate::model::{Arrangement, FluidType};
use serde::{Deserialize, Serialize};
use ss_core::numeric::Real;
use std::fmt;

/// Operating temperature band used to pick an oil grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    /// Below 70 °C
    Low,
    /// 70 °C up to (not including) 150 °C
    Medium,
    /// 150 °C and above
    High,
}

impl TemperatureBand {
    pub fn from_temperature(temperature_c: Real) -> Self {
        if temperature_c < 70.0 {
            TemperatureBand::Low
        } else if temperature_c < 150.0 {
            TemperatureBand::Medium
        } else {
            TemperatureBand::High
        }
    }
}

/// Recommended auxiliary fluid. Serialized as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BarrierFluid {
    NotRequired,
    MineralOil,
    ParaffinOil,
    SyntheticOil,
    WaterGlycol,
}

impl BarrierFluid {
    const ALL: [BarrierFluid; 5] = [
        BarrierFluid::NotRequired,
        BarrierFluid::MineralOil,
        BarrierFluid::ParaffinOil,
        BarrierFluid::SyntheticOil,
        BarrierFluid::WaterGlycol,
    ];

    pub fn text(self) -> &'static str {
        match self {
            BarrierFluid::NotRequired => "not required",
            BarrierFluid::MineralOil => "Mineral oil, 2\u{2013}10 cSt at operating temperature",
            BarrierFluid::ParaffinOil => "Paraffin-based high-purity oil",
            BarrierFluid::SyntheticOil => "Synthetic-based oil",
            BarrierFluid::WaterGlycol => {
                "Water/ethylene-glycol mixture (commercial antifreeze prohibited)"
            }
        }
    }

    pub fn is_required(self) -> bool {
        self != BarrierFluid::NotRequired
    }
}

impl fmt::Display for BarrierFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<BarrierFluid> for String {
    fn from(b: BarrierFluid) -> Self {
        b.text().to_string()
    }
}

impl TryFrom<String> for BarrierFluid {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Hand-edited files often carry a hyphen in place of the en dash
        let wanted = value.trim().replace('-', "\u{2013}");
        BarrierFluid::ALL
            .into_iter()
            .find(|b| b.text().replace('-', "\u{2013}").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown barrier fluid: '{value}'"))
    }
}

pub fn recommend_barrier_fluid(fluid_type: FluidType, band: TemperatureBand) -> BarrierFluid {
    match (fluid_type, band) {
        (FluidType::Hydrocarbon, TemperatureBand::Low) => BarrierFluid::MineralOil,
        (FluidType::Hydrocarbon, TemperatureBand::Medium) => BarrierFluid::ParaffinOil,
        (FluidType::Hydrocarbon, TemperatureBand::High) => BarrierFluid::SyntheticOil,
        (FluidType::Nonhydrocarbon, _) => BarrierFluid::WaterGlycol,
    }
}

/// Only arrangements 2 and 3 get a recommendation.
pub fn barrier_fluid_for(arrangement: Arrangement, fluid_type: FluidType, temperature_c: Real) -> BarrierFluid {
    if !arrangement.uses_auxiliary_fluid() {
        return BarrierFluid::NotRequired;
    }
    recommend_barrier_fluid(fluid_type, TemperatureBand::from_temperature(temperature_c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_at_70_and_150() {
        assert_eq!(TemperatureBand::from_temperature(-20.0), TemperatureBand::Low);
        assert_eq!(TemperatureBand::from_temperature(69.9), TemperatureBand::Low);
        assert_eq!(TemperatureBand::from_temperature(70.0), TemperatureBand::Medium);
        assert_eq!(TemperatureBand::from_temperature(149.9), TemperatureBand::Medium);
        assert_eq!(TemperatureBand::from_temperature(150.0), TemperatureBand::High);
    }

    #[test]
    fn hydrocarbon_oils_by_band() {
        assert_eq!(
            recommend_barrier_fluid(FluidType::Hydrocarbon, TemperatureBand::Low),
            BarrierFluid::MineralOil
        );
        assert_eq!(
            recommend_barrier_fluid(FluidType::Hydrocarbon, TemperatureBand::Medium),
            BarrierFluid::ParaffinOil
        );
        assert_eq!(
            recommend_barrier_fluid(FluidType::Hydrocarbon, TemperatureBand::High),
            BarrierFluid::SyntheticOil
        );
    }

    #[test]
    fn nonhydrocarbon_always_water_glycol() {
        for band in [TemperatureBand::Low, TemperatureBand::Medium, TemperatureBand::High] {
            assert_eq!(
                recommend_barrier_fluid(FluidType::Nonhydrocarbon, band),
                BarrierFluid::WaterGlycol
            );
        }
    }

    #[test]
    fn arrangement_one_needs_no_barrier_fluid() {
        let b = barrier_fluid_for(Arrangement::One, FluidType::Hydrocarbon, 100.0);
        assert_eq!(b.to_string(), "not required");
        assert!(!b.is_required());

        let b = barrier_fluid_for(Arrangement::Two, FluidType::Hydrocarbon, 100.0);
        assert_eq!(b, BarrierFluid::ParaffinOil);
        let b = barrier_fluid_for(Arrangement::Three, FluidType::Nonhydrocarbon, 20.0);
        assert_eq!(b, BarrierFluid::WaterGlycol);
    }

    #[test]
    fn text_round_trips_through_try_from() {
        for b in BarrierFluid::ALL {
            assert_eq!(BarrierFluid::try_from(b.text().to_string()), Ok(b));
        }
        assert!(BarrierFluid::try_from("glycerine".to_string()).is_err());
    }

    #[test]
    fn mineral_oil_range_uses_en_dash() {
        assert_eq!(
            BarrierFluid::MineralOil.text(),
            "Mineral oil, 2\u{2013}10 cSt at operating temperature"
        );
        assert_eq!(
            BarrierFluid::try_from("Mineral oil, 2-10 cSt at operating temperature".to_string()),
            Ok(BarrierFluid::MineralOil)
        );
    }
}
