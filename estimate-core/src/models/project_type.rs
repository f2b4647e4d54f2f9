use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseEnumError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Architecture,
    #[default]
    Home,
    Office,
    Retail,
    Turnkey,
}

impl ProjectType {
    /// Every project type, in the order the selection cards are shown.
    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::Home,
            ProjectType::Architecture,
            ProjectType::Office,
            ProjectType::Retail,
            ProjectType::Turnkey,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Home => "home",
            Self::Office => "office",
            Self::Retail => "retail",
            Self::Turnkey => "turnkey",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "architecture" => Some(Self::Architecture),
            "home" => Some(Self::Home),
            "office" => Some(Self::Office),
            "retail" => Some(Self::Retail),
            "turnkey" => Some(Self::Turnkey),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::Home => "Home Interior",
            Self::Office => "Office Interior",
            Self::Retail => "Retail/Shop",
            Self::Turnkey => "Full Turnkey",
        }
    }

    /// Whether the residential add-ons (kitchen, bedrooms, living/dining,
    /// wardrobes, false ceiling) are priced for this project type.
    pub fn has_residential_addons(&self) -> bool {
        matches!(self, Self::Home | Self::Turnkey)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseEnumError::new("project type", s))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_id() {
        for project_type in ProjectType::all() {
            assert_eq!(ProjectType::parse(project_type.as_str()), Some(*project_type));
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(ProjectType::parse("  Turnkey "), Some(ProjectType::Turnkey));
    }

    #[test]
    fn from_str_reports_unknown_id() {
        let err = "villa".parse::<ProjectType>().unwrap_err();

        assert_eq!(err.kind, "project type");
        assert_eq!(err.value, "villa");
    }

    #[test]
    fn residential_addons_only_for_home_and_turnkey() {
        let with_addons: Vec<_> = ProjectType::all()
            .iter()
            .filter(|p| p.has_residential_addons())
            .copied()
            .collect();

        assert_eq!(with_addons, vec![ProjectType::Home, ProjectType::Turnkey]);
    }

    #[test]
    fn serializes_as_lowercase_id() {
        let json = serde_json::to_string(&ProjectType::Office).unwrap();

        assert_eq!(json, "\"office\"");
    }
}
