mod estimate_input;
mod estimate_result;
mod finish_level;
mod lead_info;
mod location;
mod parse_error;
mod project_type;
mod scope;
mod timeline;

pub use estimate_input::EstimateInput;
pub use estimate_result::{CostBreakup, EstimateResult};
pub use finish_level::FinishLevel;
pub use lead_info::{LeadInfo, LeadValidationError};
pub use location::Location;
pub use parse_error::ParseEnumError;
pub use project_type::ProjectType;
pub use scope::Scope;
pub use timeline::TimelinePreference;
