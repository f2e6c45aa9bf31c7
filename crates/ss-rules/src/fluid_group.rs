use crate::model::{FluidGroup, FluidType};

/// The flashing flag only distinguishes hydrocarbons.
pub fn classify_fluid_group(fluid_type: FluidType, flashing: bool) -> FluidGroup {
    match (fluid_type, flashing) {
        (FluidType::Hydrocarbon, true) => FluidGroup::FlashingHydrocarbon,
        (FluidType::Hydrocarbon, false) => FluidGroup::NonflashingHydrocarbon,
        (FluidType::Nonhydrocarbon, _) => FluidGroup::Nonhydrocarbon,
    }
}
