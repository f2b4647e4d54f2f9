use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FinishLevel, Location, ProjectType, Scope, TimelinePreference};

/// Everything the pricing engine needs for one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    pub project_type: ProjectType,

    /// Free-form property description (e.g. "Apartment"). Not priced.
    #[serde(default)]
    pub property_type: String,

    /// Matched against [`Location`]; unknown values are priced neutrally.
    pub location: String,

    /// Built-up area in square feet.
    pub area: Decimal,

    #[serde(default)]
    pub scope: Scope,

    pub finish_level: FinishLevel,
    pub timeline: TimelinePreference,
}

impl EstimateInput {
    /// The known location this input refers to, if any.
    pub fn known_location(&self) -> Option<Location> {
        Location::parse(&self.location)
    }
}

impl Default for EstimateInput {
    fn default() -> Self {
        Self {
            project_type: ProjectType::Home,
            property_type: "Apartment".to_string(),
            location: Location::Gurgaon.as_str().to_string(),
            area: Decimal::from(1200),
            scope: Scope::typical_home(),
            finish_level: FinishLevel::Premium,
            timeline: TimelinePreference::Standard,
        }
    }
}
