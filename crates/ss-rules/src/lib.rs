//! ss-rules: API 682 mechanical seal selection rules.
//!
//! Provides:
//! - Service category classification from pressure, temperature and speed
//! - Fluid group classification
//! - Seal type, arrangement and barrier fluid selection
//! - A single [`evaluate`] entry point producing a [`Recommendation`]
//! - Reference guidance text for rendering alongside a recommendation
//!
//! Everything here is a pure function of its inputs. Out-of-scope
//! conditions are reported as `category: None`, never as an error.
//!
//! # Example
//!
//! ```
//! use ss_rules::{
//!     Arrangement, EnvironmentalFactors, FluidProperties, OperatingConditions, SealType,
//!     SelectionInput, evaluate,
//! };
//!
//! let input = SelectionInput {
//!     operating: OperatingConditions::new(15.0, 100.0, 10.0),
//!     fluid: FluidProperties::default(),
//!     environment: EnvironmentalFactors::default(),
//! };
//!
//! let rec = evaluate(&input);
//! assert_eq!(rec.seal_type, SealType::TypeA);
//! assert_eq!(rec.arrangement, Arrangement::One);
//! assert_eq!(rec.barrier_fluid.to_string(), "not required");
//! ```

pub mod arrangement;
pub mod barrier;
pub mod category;
pub mod error;
pub mod evaluate;
pub mod fluid_group;
pub mod guidance;
pub mod model;
pub mod seal_type;

// Re-exports for ergonomics
pub use arrangement::{ArrangementBasis, select_arrangement, select_arrangement_with_basis};
pub use barrier::{BarrierFluid, TemperatureBand, barrier_fluid_for, recommend_barrier_fluid};
pub use category::{CATEGORY_LIMITS, CategoryLimits, classify_category};
pub use error::RuleError;
pub use evaluate::{Recommendation, ScopeStatus, evaluate};
pub use fluid_group::classify_fluid_group;
pub use model::{
    Arrangement, Category, Contaminants, EnvironmentalFactors, FluidGroup, FluidProperties,
    FluidType, OperatingConditions, SealType, SelectionInput,
};
pub use seal_type::select_seal_type;
