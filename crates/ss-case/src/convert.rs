//! Conversion from validated case definitions into evaluator input.

use crate::schema::CaseDef;
use crate::validate::{ValidationError, parse_fluid_type, parse_mandated_arrangement, validate_case};
use ss_rules::{
    Contaminants, EnvironmentalFactors, FluidProperties, OperatingConditions, SelectionInput,
};

impl CaseDef {
    /// Validate the case and build the evaluator input from it.
    pub fn to_input(&self) -> Result<SelectionInput, ValidationError> {
        validate_case(self)?;

        let op = &self.operating;
        let fluid = &self.fluid;
        let env = &self.environment;
        let c = &fluid.contaminants;

        Ok(SelectionInput {
            operating: OperatingConditions::new(op.pressure_bar_g, op.temperature_c, op.speed_mps),
            fluid: FluidProperties {
                fluid_type: parse_fluid_type(self)?,
                flashing: fluid.flashing,
                hazardous: fluid.hazardous,
                toxic: fluid.toxic,
                flammable: fluid.flammable,
                polymerizing: fluid.polymerizing,
                poor_lubricity: fluid.poor_lubricity,
                contaminants: Contaminants {
                    caustic: c.caustic,
                    h2s: c.h2s,
                    amines: c.amines,
                    ammonia: c.ammonia,
                    abrasive: c.abrasive,
                },
            },
            environment: EnvironmentalFactors {
                exposure_hazard: env.exposure_hazard,
                vapor_risk: env.vapor_risk,
                environmental_limits: env.environmental_limits,
                zero_leakage: env.zero_leakage,
                low_density: env.low_density,
                high_vapor_pressure: env.high_vapor_pressure,
                mandated_arrangement: parse_mandated_arrangement(self)?,
            },
        })
    }
}
