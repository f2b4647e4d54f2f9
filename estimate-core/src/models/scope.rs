use serde::{Deserialize, Serialize};

/// Rooms and features included in a project.
///
/// Which fields are priced depends on the project type; the rest are
/// carried along without effect. Counts are signed and unchecked here,
/// see [`crate::PricingEngine::strict`] for rejecting negatives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    pub kitchen: bool,
    pub bedrooms: i32,
    pub living_dining: bool,
    pub wardrobes: i32,
    pub false_ceiling: bool,
    pub flooring_upgrade: bool,
    /// Office only.
    pub workstations: i32,
    /// Retail only.
    pub display_units: bool,
}

impl Scope {
    /// The scope the estimate form starts out with.
    pub fn typical_home() -> Self {
        Self {
            kitchen: true,
            bedrooms: 2,
            living_dining: true,
            wardrobes: 2,
            false_ceiling: true,
            ..Self::default()
        }
    }

    /// Named counts, for validation messages.
    pub fn counts(&self) -> [(&'static str, i32); 3] {
        [
            ("bedrooms", self.bedrooms),
            ("wardrobes", self.wardrobes),
            ("workstations", self.workstations),
        ]
    }
}
