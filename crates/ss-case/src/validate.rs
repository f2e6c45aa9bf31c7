//! Case file validation.
//!
//! These are the input checks an entry form would enforce. The rule
//! evaluator itself accepts any value.

use crate::schema::{CaseDef, Study};
use ss_core::SsError;
use ss_core::numeric::{Real, ensure_within};
use ss_rules::{Arrangement, FluidType};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

/// Accepted seal chamber pressure (bar g).
pub const PRESSURE_RANGE_BAR_G: (Real, Real) = (0.0, 200.0);
/// Accepted pumping temperature (°C).
pub const TEMPERATURE_RANGE_C: (Real, Real) = (-50.0, 500.0);
/// Accepted shaft speed (m/s).
pub const SPEED_RANGE_MPS: (Real, Real) = (0.0, 50.0);

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version == 0 || study.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    let mut case_ids = HashSet::new();
    for case in &study.cases {
        if !case_ids.insert(&case.id) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }
        validate_case(case)?;
    }

    Ok(())
}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "case id".to_string(),
            value: format!("'{}'", case.id),
            reason: "must not be empty".to_string(),
        });
    }

    let op = &case.operating;
    check_range(case, "pressure_bar_g", op.pressure_bar_g, PRESSURE_RANGE_BAR_G)?;
    check_range(case, "temperature_c", op.temperature_c, TEMPERATURE_RANGE_C)?;
    check_range(case, "speed_mps", op.speed_mps, SPEED_RANGE_MPS)?;

    parse_fluid_type(case)?;
    parse_mandated_arrangement(case)?;

    Ok(())
}

fn check_range(
    case: &CaseDef,
    field: &'static str,
    value: Real,
    (lo, hi): (Real, Real),
) -> Result<(), ValidationError> {
    ensure_within(value, lo, hi, field)
        .map(|_| ())
        .map_err(|err| {
            let reason = match err {
                SsError::NonFinite { .. } => "must be finite".to_string(),
                SsError::InvalidArg { .. } => format!("must be within [{lo}, {hi}]"),
            };
            ValidationError::InvalidValue {
                field: format!("case '{}' {}", case.id, field),
                value: value.to_string(),
                reason,
            }
        })
}

pub(crate) fn parse_fluid_type(case: &CaseDef) -> Result<FluidType, ValidationError> {
    case.fluid
        .fluid_type
        .parse::<FluidType>()
        .map_err(|err| ValidationError::InvalidValue {
            field: format!("case '{}' fluid_type", case.id),
            value: case.fluid.fluid_type.clone(),
            reason: err.to_string(),
        })
}

pub(crate) fn parse_mandated_arrangement(
    case: &CaseDef,
) -> Result<Option<Arrangement>, ValidationError> {
    case.environment
        .mandated_arrangement
        .map(|n| {
            Arrangement::try_from(n).map_err(|err| ValidationError::InvalidValue {
                field: format!("case '{}' mandated_arrangement", case.id),
                value: n.to_string(),
                reason: err.to_string(),
            })
        })
        .transpose()
}
