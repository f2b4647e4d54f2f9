use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Split of the estimated cost into design, material and execution.
///
/// Each part is rounded on its own, so the sum can drift from the
/// unrounded total by a couple of currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakup {
    #[serde(serialize_with = "whole_units::serialize")]
    pub design: Decimal,
    #[serde(serialize_with = "whole_units::serialize")]
    pub material: Decimal,
    #[serde(serialize_with = "whole_units::serialize")]
    pub execution: Decimal,
}

impl CostBreakup {
    pub fn total(&self) -> Decimal {
        self.design + self.material + self.execution
    }
}

/// Indicative cost range for one set of inputs. All amounts are whole
/// currency units and serialize as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    #[serde(serialize_with = "whole_units::serialize")]
    pub min: Decimal,
    #[serde(serialize_with = "whole_units::serialize")]
    pub max: Decimal,
    pub breakup: CostBreakup,
    /// Working days, fixed by the timeline preference.
    pub timeline_days: u32,
}

/// Whole amounts that fit an `i64` go out as integers; anything else keeps
/// the default decimal string.
mod whole_units {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Decimal,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value.to_i64() {
            Some(whole) if value.fract().is_zero() => serializer.serialize_i64(whole),
            _ => Serialize::serialize(value, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn sample() -> EstimateResult {
        EstimateResult {
            min: dec!(3226500),
            max: dec!(3943500),
            breakup: CostBreakup {
                design: dec!(286800),
                material: dec!(2222700),
                execution: dec!(1075500),
            },
            timeline_days: 75,
        }
    }

    #[test]
    fn amounts_serialize_as_json_integers() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            value,
            json!({
                "min": 3226500,
                "max": 3943500,
                "breakup": { "design": 286800, "material": 2222700, "execution": 1075500 },
                "timeline_days": 75
            })
        );
    }

    #[test]
    fn negative_amounts_stay_integers() {
        let result = EstimateResult {
            min: dec!(-162000),
            ..sample()
        };

        let value = serde_json::to_value(result).unwrap();

        assert_eq!(value["min"], json!(-162000));
    }

    #[test]
    fn integer_json_reads_back() {
        let text = serde_json::to_string(&sample()).unwrap();

        let parsed: EstimateResult = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, sample());
    }

    #[test]
    fn breakup_total_sums_parts() {
        assert_eq!(sample().breakup.total(), dec!(3585000));
    }
}
