//! Text rendering of recommendations and reference tables.

use serde::Serialize;
use ss_rules::{CATEGORY_LIMITS, CategoryLimits, Recommendation, guidance};
use std::fmt;

/// One evaluated case as emitted in YAML/JSON output.
#[derive(Debug, Serialize)]
pub struct CaseReport<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Text panel for one recommendation, headed by `title`.
pub struct RecommendationPanel<'a> {
    pub title: &'a str,
    pub recommendation: &'a Recommendation,
}

impl fmt::Display for RecommendationPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.recommendation;
        writeln!(f, "== {}", self.title)?;

        let Some(category) = rec.category else {
            return writeln!(f, "✗ {}", guidance::OUT_OF_SCOPE_MESSAGE);
        };

        writeln!(f, "✓ {}: {}", category, guidance::category_description(category))?;
        writeln!(f, "✓ Fluid group: {}", rec.fluid_group)?;
        writeln!(f, "✓ Seal type: {}", rec.seal_type)?;
        writeln!(
            f,
            "✓ {} ({})  [{}]",
            guidance::arrangement_description(rec.arrangement),
            rec.arrangement,
            rec.arrangement_basis
        )?;
        if rec.barrier_fluid.is_required() {
            writeln!(f, "  Barrier/Buffer fluid: {}", rec.barrier_fluid)?;
        }

        let limits = CategoryLimits::for_category(category);
        writeln!(f, "\nStandard requirements:")?;
        writeln!(f, "  {} limits:", category)?;
        writeln!(f, "    - Max pressure: {} bar g", limits.max_pressure_bar_g)?;
        writeln!(f, "    - Max temperature: {} °C", limits.max_temperature_c)?;
        writeln!(f, "    - Max speed: {} m/s", limits.max_speed_mps)?;

        writeln!(f, "  {} seal features:", rec.seal_type)?;
        for line in guidance::seal_type_features(rec.seal_type) {
            writeln!(f, "    - {line}")?;
        }

        writeln!(f, "  {} requirements:", rec.arrangement)?;
        for line in guidance::arrangement_requirements(rec.arrangement) {
            writeln!(f, "    - {line}")?;
        }

        let barrier = guidance::barrier_fluid_requirements(rec.arrangement);
        if !barrier.is_empty() {
            writeln!(f, "  Barrier fluid requirements:")?;
            for line in barrier {
                writeln!(f, "    - {line}")?;
            }
        }
        Ok(())
    }
}

/// Category limits table.
pub struct LimitsTable;

impl fmt::Display for LimitsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>20} {:>18} {:>16}",
            "Category", "Max pressure (bar g)", "Max temp (°C)", "Max speed (m/s)"
        )?;
        for limits in &CATEGORY_LIMITS {
            writeln!(
                f,
                "{:<10} {:>20} {:>18} {:>16}",
                limits.category.number(),
                limits.max_pressure_bar_g,
                limits.max_temperature_c,
                limits.max_speed_mps
            )?;
        }
        Ok(())
    }
}
