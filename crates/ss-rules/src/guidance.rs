//! Reference text shown next to a recommendation.

use crate::model::{Arrangement, Category, SealType};

pub const OUT_OF_SCOPE_MESSAGE: &str =
    "Operating conditions exceed API 682 scope. Consult Sheet 10 for special designs";

/// Physical property limits for an arrangement 3 barrier fluid.
pub const BARRIER_FLUID_REQUIREMENTS: [&str; 4] = [
    "Viscosity < 500 cSt at minimum temperature",
    "Initial boiling point > service temp + 28°C",
    "Flash point > service temperature (if oxygen present)",
    "Must not freeze at minimum ambient temperature",
];

pub fn category_description(category: Category) -> &'static str {
    match category {
        Category::One => "General Service Conditions",
        Category::Two => "Severe Service Conditions",
        Category::Three => "Extreme Service Conditions",
    }
}

pub fn arrangement_description(arrangement: Arrangement) -> &'static str {
    match arrangement {
        Arrangement::One => "Single Seal",
        Arrangement::Two => "Tandem Seals",
        Arrangement::Three => "Double Seals",
    }
}

pub fn seal_type_features(seal_type: SealType) -> &'static [&'static str] {
    match seal_type {
        SealType::TypeA => &["Elastomer secondary seals"],
        SealType::TypeB | SealType::TypeC => &["Bellows design"],
        SealType::EngineeredSystem => &["Engineered solution required"],
    }
}

pub fn arrangement_requirements(arrangement: Arrangement) -> &'static [&'static str] {
    match arrangement {
        Arrangement::One => &["No auxiliary system required"],
        Arrangement::Two => &["Buffer fluid system recommended"],
        Arrangement::Three => &[
            "Barrier fluid system required",
            "Zero process leakage to atmosphere",
        ],
    }
}

/// Barrier fluid property limits apply to pressurized (arrangement 3) systems only.
pub fn barrier_fluid_requirements(arrangement: Arrangement) -> &'static [&'static str] {
    match arrangement {
        Arrangement::Three => &BARRIER_FLUID_REQUIREMENTS,
        Arrangement::One | Arrangement::Two => &[],
    }
}
