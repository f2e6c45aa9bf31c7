//! Service category classification.

use crate::model::{Category, OperatingConditions};
use ss_core::numeric::Real;

/// Upper bounds of one service category. All limits are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryLimits {
    pub category: Category,
    pub max_pressure_bar_g: Real,
    pub max_temperature_c: Real,
    pub max_speed_mps: Real,
}

impl CategoryLimits {
    pub fn admits(&self, pressure_bar_g: Real, temperature_c: Real, speed_mps: Real) -> bool {
        pressure_bar_g <= self.max_pressure_bar_g
            && temperature_c <= self.max_temperature_c
            && speed_mps <= self.max_speed_mps
    }

    pub fn for_category(category: Category) -> &'static CategoryLimits {
        match category {
            Category::One => &CATEGORY_LIMITS[0],
            Category::Two => &CATEGORY_LIMITS[1],
            Category::Three => &CATEGORY_LIMITS[2],
        }
    }
}

/// Ascending tiers. Each tier contains the previous one, so the first match is
/// the tightest fit.
pub const CATEGORY_LIMITS: [CategoryLimits; 3] = [
    CategoryLimits {
        category: Category::One,
        max_pressure_bar_g: 20.0,
        max_temperature_c: 260.0,
        max_speed_mps: 20.0,
    },
    CategoryLimits {
        category: Category::Two,
        max_pressure_bar_g: 40.0,
        max_temperature_c: 400.0,
        max_speed_mps: 25.0,
    },
    CategoryLimits {
        category: Category::Three,
        max_pressure_bar_g: 100.0,
        max_temperature_c: 400.0,
        max_speed_mps: 25.0,
    },
];

/// Lowest category whose limits hold for all three values.
///
/// `None` means the conditions are outside the standard's scope. Non-finite
/// inputs never satisfy a limit and also land there.
pub fn classify_category(pressure_bar_g: Real, temperature_c: Real, speed_mps: Real) -> Option<Category> {
    CATEGORY_LIMITS
        .iter()
        .find(|limits| limits.admits(pressure_bar_g, temperature_c, speed_mps))
        .map(|limits| limits.category)
}

impl OperatingConditions {
    pub fn category(&self) -> Option<Category> {
        classify_category(self.pressure_bar_g, self.temperature_c, self.speed_mps)
    }
}
