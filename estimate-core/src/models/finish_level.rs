use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// Quality tier of materials and labour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishLevel {
    Economy,
    #[default]
    Premium,
    Luxury,
}

impl FinishLevel {
    pub fn all() -> &'static [FinishLevel] {
        &[FinishLevel::Economy, FinishLevel::Premium, FinishLevel::Luxury]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Some(Self::Economy),
            "premium" => Some(Self::Premium),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Economy => "Functional, high-quality basics for rentals or tight budgets.",
            Self::Premium => "Superior finishes, custom textures, and top-tier brands.",
            Self::Luxury => "High-end exotic veneers, Italian marbles, and automation.",
        }
    }
}

impl fmt::Display for FinishLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinishLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseEnumError::new("finish level", s))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_known_levels() {
        assert_eq!(FinishLevel::parse("economy"), Some(FinishLevel::Economy));
        assert_eq!(FinishLevel::parse("LUXURY"), Some(FinishLevel::Luxury));
        assert_eq!(FinishLevel::parse("gold"), None);
    }

    #[test]
    fn levels_are_ordered_cheapest_first() {
        assert!(FinishLevel::Economy < FinishLevel::Premium);
        assert!(FinishLevel::Premium < FinishLevel::Luxury);
    }
}
