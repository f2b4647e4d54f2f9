//! Cost estimation for interior and architecture projects.
//!
//! [`rates`] holds the fixed rate tables, [`pricing`] turns an
//! [`EstimateInput`](crate::EstimateInput) into an
//! [`EstimateResult`](crate::EstimateResult) using them.

pub mod common;
pub mod pricing;
pub mod rates;

pub use pricing::{PricingEngine, PricingError, calculate_estimate};
