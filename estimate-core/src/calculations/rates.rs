//! Fixed rate tables.
//!
//! Every enum-keyed table is an exhaustive `match`, so adding a project
//! type, finish level or timeline will not compile until it is priced.
//! Location is the one free-text key and falls back to a neutral 1.0.
//!
//! | Project type | Base rate / sq ft |
//! |--------------|-------------------|
//! | architecture | 100               |
//! | home         | 1200              |
//! | office       | 1500              |
//! | retail       | 1800              |
//! | turnkey      | 2500              |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{FinishLevel, Location, ProjectType, TimelinePreference};

pub const KITCHEN_ADDON: Decimal = dec!(150000);
pub const BEDROOM_ADDON: Decimal = dec!(100000);
pub const LIVING_DINING_ADDON: Decimal = dec!(120000);
pub const WARDROBE_ADDON: Decimal = dec!(60000);
/// Per square foot.
pub const FALSE_CEILING_RATE: Decimal = dec!(120);
pub const WORKSTATION_ADDON: Decimal = dec!(25000);

/// Lower and upper edge of the quoted range, relative to the total.
pub const RANGE_LOW: Decimal = dec!(0.9);
pub const RANGE_HIGH: Decimal = dec!(1.1);

pub const DESIGN_SHARE: Decimal = dec!(0.08);
pub const MATERIAL_SHARE: Decimal = dec!(0.62);
pub const EXECUTION_SHARE: Decimal = dec!(0.30);

pub const NEUTRAL_MULTIPLIER: Decimal = Decimal::ONE;

/// Base cost per square foot.
pub fn base_rate(project_type: ProjectType) -> Decimal {
    match project_type {
        ProjectType::Architecture => dec!(100),
        ProjectType::Home => dec!(1200),
        ProjectType::Office => dec!(1500),
        ProjectType::Retail => dec!(1800),
        ProjectType::Turnkey => dec!(2500),
    }
}

pub fn finish_multiplier(finish_level: FinishLevel) -> Decimal {
    match finish_level {
        FinishLevel::Economy => dec!(1.0),
        FinishLevel::Premium => dec!(1.5),
        FinishLevel::Luxury => dec!(2.5),
    }
}

pub fn known_location_multiplier(location: Location) -> Decimal {
    match location {
        Location::Gurgaon => dec!(1.15),
        Location::DelhiNcr => dec!(1.05),
        Location::OtherCity => dec!(1.0),
    }
}

/// Multiplier for a free-text location; unknown names get
/// [`NEUTRAL_MULTIPLIER`].
pub fn location_multiplier(location: &str) -> Decimal {
    Location::parse(location)
        .map(known_location_multiplier)
        .unwrap_or(NEUTRAL_MULTIPLIER)
}

pub fn timeline_multiplier(timeline: TimelinePreference) -> Decimal {
    match timeline {
        TimelinePreference::Standard => dec!(1.0),
        TimelinePreference::Fast => dec!(1.2),
    }
}

/// Working days quoted for a timeline preference.
pub fn timeline_days(timeline: TimelinePreference) -> u32 {
    match timeline {
        TimelinePreference::Standard => 75,
        TimelinePreference::Fast => 45,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn breakup_shares_cover_the_whole_total() {
        assert_eq!(DESIGN_SHARE + MATERIAL_SHARE + EXECUTION_SHARE, Decimal::ONE);
    }

    #[test]
    fn finish_multipliers_strictly_increase() {
        let multipliers: Vec<_> = FinishLevel::all()
            .iter()
            .map(|f| finish_multiplier(*f))
            .collect();

        assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn location_multiplier_for_known_names() {
        assert_eq!(location_multiplier("Gurgaon"), dec!(1.15));
        assert_eq!(location_multiplier("Delhi NCR"), dec!(1.05));
        assert_eq!(location_multiplier("Other City"), dec!(1.0));
    }

    #[test]
    fn location_multiplier_falls_back_for_unknown_names() {
        assert_eq!(location_multiplier(""), NEUTRAL_MULTIPLIER);
        assert_eq!(location_multiplier("Mumbai"), NEUTRAL_MULTIPLIER);
        assert_eq!(location_multiplier("gurgaon"), NEUTRAL_MULTIPLIER);
    }

    #[test]
    fn fast_timeline_is_shorter_and_dearer() {
        assert_eq!(timeline_days(TimelinePreference::Fast), 45);
        assert_eq!(timeline_days(TimelinePreference::Standard), 75);
        assert!(
            timeline_multiplier(TimelinePreference::Fast)
                > timeline_multiplier(TimelinePreference::Standard)
        );
    }
}
