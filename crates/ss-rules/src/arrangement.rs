//! Seal arrangement selection.
//!
//! The rules form an ordered list and the first one that fires decides the
//! arrangement. The order matters and must not be changed:
//!
//! 1. a mandated arrangement is returned as-is, with no check against the
//!    other flags
//! 2. a contaminated nonhydrocarbon needs arrangement 3
//! 3. any severe-service flag needs arrangement 3
//! 4. a difficult fluid needs arrangement 2
//! 5. otherwise arrangement 1
//!
//! Rule 4's flags are all part of rule 3's set, so rule 4 can never fire as
//! written. It is kept in place so the table reads the same as the published
//! selection sheets.

use crate::model::{Arrangement, EnvironmentalFactors, FluidGroup, FluidProperties};
use serde::{Deserialize, Serialize};
use ss_core::numeric::Real;
use std::fmt;

/// Pumping temperature above which a double seal is required (°C).
pub const HIGH_TEMPERATURE_LIMIT_C: Real = 260.0;

/// Which arrangement rule produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrangementBasis {
    Mandated,
    ContaminatedNonhydrocarbon,
    SevereService,
    DifficultFluid,
    Default,
}

impl fmt::Display for ArrangementBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ArrangementBasis::Mandated => "mandated by user or site practice",
            ArrangementBasis::ContaminatedNonhydrocarbon => "contaminated nonhydrocarbon service",
            ArrangementBasis::SevereService => "emission, safety or severe-service requirement",
            ArrangementBasis::DifficultFluid => "difficult fluid properties",
            ArrangementBasis::Default => "no special requirement",
        };
        write!(f, "{text}")
    }
}

struct ArrangementContext<'a> {
    group: FluidGroup,
    fluid: &'a FluidProperties,
    environment: &'a EnvironmentalFactors,
    temperature_c: Real,
}

type ArrangementRule = fn(&ArrangementContext<'_>) -> Option<Arrangement>;

const RULES: [(ArrangementBasis, ArrangementRule); 4] = [
    (ArrangementBasis::Mandated, mandated),
    (
        ArrangementBasis::ContaminatedNonhydrocarbon,
        contaminated_nonhydrocarbon,
    ),
    (ArrangementBasis::SevereService, severe_service),
    (ArrangementBasis::DifficultFluid, difficult_fluid),
];

fn mandated(ctx: &ArrangementContext<'_>) -> Option<Arrangement> {
    ctx.environment.mandated_arrangement
}

fn contaminated_nonhydrocarbon(ctx: &ArrangementContext<'_>) -> Option<Arrangement> {
    (ctx.group == FluidGroup::Nonhydrocarbon && ctx.fluid.contaminants.any())
        .then_some(Arrangement::Three)
}

fn severe_service(ctx: &ArrangementContext<'_>) -> Option<Arrangement> {
    let env = ctx.environment;
    let severe = env.zero_leakage
        || env.exposure_hazard
        || env.vapor_risk
        || env.environmental_limits
        || ctx.temperature_c > HIGH_TEMPERATURE_LIMIT_C
        || difficult_fluid_flags(ctx);
    severe.then_some(Arrangement::Three)
}

fn difficult_fluid(ctx: &ArrangementContext<'_>) -> Option<Arrangement> {
    difficult_fluid_flags(ctx).then_some(Arrangement::Two)
}

fn difficult_fluid_flags(ctx: &ArrangementContext<'_>) -> bool {
    ctx.fluid.solids_present()
        || ctx.fluid.polymerizing
        || ctx.fluid.poor_lubricity
        || ctx.environment.low_density
        || ctx.environment.high_vapor_pressure
}

pub fn select_arrangement(
    group: FluidGroup,
    fluid: &FluidProperties,
    environment: &EnvironmentalFactors,
    temperature_c: Real,
) -> Arrangement {
    select_arrangement_with_basis(group, fluid, environment, temperature_c).0
}

/// Like [`select_arrangement`], also reporting the rule that fired.
pub fn select_arrangement_with_basis(
    group: FluidGroup,
    fluid: &FluidProperties,
    environment: &EnvironmentalFactors,
    temperature_c: Real,
) -> (Arrangement, ArrangementBasis) {
    let ctx = ArrangementContext {
        group,
        fluid,
        environment,
        temperature_c,
    };

    RULES
        .iter()
        .find_map(|(basis, rule)| rule(&ctx).map(|a| (a, *basis)))
        .unwrap_or((Arrangement::One, ArrangementBasis::Default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contaminants, FluidType};

    fn hydrocarbon() -> FluidProperties {
        FluidProperties::default()
    }

    fn nonhydrocarbon() -> FluidProperties {
        FluidProperties {
            fluid_type: FluidType::Nonhydrocarbon,
            ..FluidProperties::default()
        }
    }

    #[test]
    fn no_flags_gives_arrangement_one() {
        let env = EnvironmentalFactors::default();
        for group in [
            FluidGroup::FlashingHydrocarbon,
            FluidGroup::NonflashingHydrocarbon,
            FluidGroup::Nonhydrocarbon,
        ] {
            assert_eq!(
                select_arrangement_with_basis(group, &hydrocarbon(), &env, 100.0),
                (Arrangement::One, ArrangementBasis::Default)
            );
        }
    }

    #[test]
    fn mandate_overrides_everything() {
        let fluid = FluidProperties {
            polymerizing: true,
            contaminants: Contaminants {
                caustic: true,
                abrasive: true,
                ..Contaminants::default()
            },
            ..nonhydrocarbon()
        };
        let env = EnvironmentalFactors {
            zero_leakage: true,
            exposure_hazard: true,
            mandated_arrangement: Some(Arrangement::Two),
            ..EnvironmentalFactors::default()
        };
        assert_eq!(
            select_arrangement_with_basis(FluidGroup::Nonhydrocarbon, &fluid, &env, 350.0),
            (Arrangement::Two, ArrangementBasis::Mandated)
        );
    }

    #[test]
    fn mandate_can_lower_the_arrangement() {
        let env = EnvironmentalFactors {
            zero_leakage: true,
            mandated_arrangement: Some(Arrangement::One),
            ..EnvironmentalFactors::default()
        };
        assert_eq!(
            select_arrangement(FluidGroup::NonflashingHydrocarbon, &hydrocarbon(), &env, 100.0),
            Arrangement::One
        );
    }

    #[test]
    fn contaminated_nonhydrocarbon_needs_double_seal() {
        let fluid = FluidProperties {
            contaminants: Contaminants {
                caustic: true,
                ..Contaminants::default()
            },
            ..nonhydrocarbon()
        };
        let env = EnvironmentalFactors::default();
        assert_eq!(
            select_arrangement_with_basis(FluidGroup::Nonhydrocarbon, &fluid, &env, 40.0),
            (Arrangement::Three, ArrangementBasis::ContaminatedNonhydrocarbon)
        );
    }

    #[test]
    fn chemical_contaminants_do_not_matter_for_hydrocarbons() {
        let fluid = FluidProperties {
            contaminants: Contaminants {
                h2s: true,
                amines: true,
                ammonia: true,
                caustic: true,
                abrasive: false,
            },
            ..hydrocarbon()
        };
        let env = EnvironmentalFactors::default();
        assert_eq!(
            select_arrangement(FluidGroup::NonflashingHydrocarbon, &fluid, &env, 100.0),
            Arrangement::One
        );
    }

    #[test]
    fn each_severe_flag_gives_arrangement_three() {
        let base = EnvironmentalFactors::default();
        let envs = [
            EnvironmentalFactors { zero_leakage: true, ..base },
            EnvironmentalFactors { exposure_hazard: true, ..base },
            EnvironmentalFactors { vapor_risk: true, ..base },
            EnvironmentalFactors { environmental_limits: true, ..base },
            EnvironmentalFactors { low_density: true, ..base },
            EnvironmentalFactors { high_vapor_pressure: true, ..base },
        ];
        for env in envs {
            assert_eq!(
                select_arrangement_with_basis(
                    FluidGroup::NonflashingHydrocarbon,
                    &hydrocarbon(),
                    &env,
                    100.0
                ),
                (Arrangement::Three, ArrangementBasis::SevereService),
                "{env:?}"
            );
        }
    }

    #[test]
    fn high_temperature_is_strictly_above_260() {
        let env = EnvironmentalFactors::default();
        let g = FluidGroup::NonflashingHydrocarbon;
        assert_eq!(select_arrangement(g, &hydrocarbon(), &env, 260.0), Arrangement::One);
        assert_eq!(select_arrangement(g, &hydrocarbon(), &env, 260.5), Arrangement::Three);
    }

    #[test]
    fn difficult_fluid_flags_are_caught_by_the_severe_rule() {
        let env = EnvironmentalFactors::default();
        let fluids = [
            FluidProperties { polymerizing: true, ..hydrocarbon() },
            FluidProperties { poor_lubricity: true, ..hydrocarbon() },
            FluidProperties {
                contaminants: Contaminants {
                    abrasive: true,
                    ..Contaminants::default()
                },
                ..hydrocarbon()
            },
        ];
        for fluid in fluids {
            assert_eq!(
                select_arrangement_with_basis(
                    FluidGroup::NonflashingHydrocarbon,
                    &fluid,
                    &env,
                    100.0
                ),
                (Arrangement::Three, ArrangementBasis::SevereService)
            );
        }
    }
}
