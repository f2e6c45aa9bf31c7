//! Full evaluation: one input record in, one recommendation out.

use crate::arrangement::{ArrangementBasis, select_arrangement_with_basis};
use crate::barrier::{BarrierFluid, barrier_fluid_for};
use crate::category::classify_category;
use crate::fluid_group::classify_fluid_group;
use crate::model::{Arrangement, Category, FluidGroup, SealType, SelectionInput};
use crate::seal_type::select_seal_type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeStatus {
    WithinScope,
    /// Conditions exceed every category; an engineered design is needed.
    OutOfScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// `None` when the operating conditions exceed every category.
    pub category: Option<Category>,
    pub fluid_group: FluidGroup,
    pub seal_type: SealType,
    pub arrangement: Arrangement,
    pub arrangement_basis: ArrangementBasis,
    pub barrier_fluid: BarrierFluid,
}

impl Recommendation {
    pub fn status(&self) -> ScopeStatus {
        match self.category {
            Some(_) => ScopeStatus::WithinScope,
            None => ScopeStatus::OutOfScope,
        }
    }

    pub fn is_within_scope(&self) -> bool {
        self.status() == ScopeStatus::WithinScope
    }
}

pub fn evaluate(input: &SelectionInput) -> Recommendation {
    let op = &input.operating;
    let fluid = &input.fluid;

    let category = classify_category(op.pressure_bar_g, op.temperature_c, op.speed_mps);
    let fluid_group = classify_fluid_group(fluid.fluid_type, fluid.flashing);
    let seal_type = select_seal_type(fluid_group, op.temperature_c, op.pressure_bar_g);
    let (arrangement, arrangement_basis) =
        select_arrangement_with_basis(fluid_group, fluid, &input.environment, op.temperature_c);
    let barrier_fluid = barrier_fluid_for(arrangement, fluid.fluid_type, op.temperature_c);

    if category.is_none() {
        tracing::warn!(
            pressure_bar_g = op.pressure_bar_g,
            temperature_c = op.temperature_c,
            speed_mps = op.speed_mps,
            "operating conditions exceed every seal category"
        );
    }

    tracing::debug!(
        ?category,
        %fluid_group,
        %seal_type,
        %arrangement,
        ?arrangement_basis,
        %barrier_fluid,
        "seal selection evaluated"
    );

    Recommendation {
        category,
        fluid_group,
        seal_type,
        arrangement,
        arrangement_basis,
        barrier_fluid,
    }
}
