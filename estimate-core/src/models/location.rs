use std::fmt;

use serde::{Deserialize, Serialize};

/// Locations with their own pricing multiplier.
///
/// Estimate inputs keep the location as free text; anything that does not
/// parse to one of these is priced at the neutral multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Gurgaon")]
    Gurgaon,
    #[serde(rename = "Delhi NCR")]
    DelhiNcr,
    #[serde(rename = "Other City")]
    OtherCity,
}

impl Location {
    pub fn all() -> &'static [Location] {
        &[Location::Gurgaon, Location::DelhiNcr, Location::OtherCity]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gurgaon => "Gurgaon",
            Self::DelhiNcr => "Delhi NCR",
            Self::OtherCity => "Other City",
        }
    }

    /// Exact, case-sensitive match on the display name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Gurgaon" => Some(Self::Gurgaon),
            "Delhi NCR" => Some(Self::DelhiNcr),
            "Other City" => Some(Self::OtherCity),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
