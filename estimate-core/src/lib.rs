pub mod calculations;
pub mod format;
pub mod messaging;
pub mod models;
pub mod wizard;

pub use calculations::{PricingEngine, PricingError, calculate_estimate};
pub use models::*;
