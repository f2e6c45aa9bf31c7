//! Seal type selection per fluid group.
//!
//! Every threshold is a strict `<`: a value sitting exactly on a boundary
//! belongs to the next bracket up.

use crate::model::{FluidGroup, SealType};
use ss_core::numeric::Real;

/// Seal chamber pressure below which the lighter seal designs apply (bar g).
pub const LOW_PRESSURE_LIMIT_BAR_G: Real = 20.0;

/// Nonhydrocarbon services above this temperature need an engineered seal (°C).
pub const NONHYDROCARBON_TEMPERATURE_LIMIT_C: Real = 80.0;

/// Upper edge of the Type A bracket for hydrocarbons (°C).
pub const HYDROCARBON_TYPE_A_LIMIT_C: Real = 176.0;

/// Upper edge of the Type C bracket for nonflashing hydrocarbons (°C).
pub const NONFLASHING_TYPE_C_LIMIT_C: Real = 280.0;

/// Upper edge of the Type C bracket for flashing hydrocarbons (°C).
pub const FLASHING_TYPE_C_LIMIT_C: Real = 260.0;

pub fn select_seal_type(group: FluidGroup, temperature_c: Real, pressure_bar_g: Real) -> SealType {
    let low_pressure = pressure_bar_g < LOW_PRESSURE_LIMIT_BAR_G;
    match group {
        FluidGroup::Nonhydrocarbon => {
            if temperature_c < NONHYDROCARBON_TEMPERATURE_LIMIT_C && low_pressure {
                SealType::TypeB
            } else {
                SealType::EngineeredSystem
            }
        }
        FluidGroup::NonflashingHydrocarbon => {
            hydrocarbon_seal_type(temperature_c, low_pressure, NONFLASHING_TYPE_C_LIMIT_C)
        }
        FluidGroup::FlashingHydrocarbon => {
            hydrocarbon_seal_type(temperature_c, low_pressure, FLASHING_TYPE_C_LIMIT_C)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HydrocarbonBracket {
    TypeA,
    TypeC,
    Engineered,
}

fn hydrocarbon_seal_type(temperature_c: Real, low_pressure: bool, type_c_limit_c: Real) -> SealType {
    let bracket = if temperature_c < HYDROCARBON_TYPE_A_LIMIT_C {
        HydrocarbonBracket::TypeA
    } else if temperature_c < type_c_limit_c {
        HydrocarbonBracket::TypeC
    } else {
        HydrocarbonBracket::Engineered
    };

    match (bracket, low_pressure) {
        (HydrocarbonBracket::TypeA, true) => SealType::TypeA,
        (HydrocarbonBracket::TypeA, false) => SealType::TypeC,
        (HydrocarbonBracket::TypeC, true) => SealType::TypeC,
        (HydrocarbonBracket::TypeC, false) => SealType::EngineeredSystem,
        (HydrocarbonBracket::Engineered, _) => SealType::EngineeredSystem,
    }
}
