//! ss-core: shared foundation for sealselect.
//!
//! Contains:
//! - units (uom SI types + constructors in the selection tables' units)
//! - numeric (Real + finiteness helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{SsError, SsResult};
pub use numeric::*;
pub use units::*;
