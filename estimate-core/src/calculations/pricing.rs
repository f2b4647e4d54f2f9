//! Project cost estimation.
//!
//! The estimate is built from an area-based term plus fixed add-ons for the
//! selected scope, then spread into a ±10% range and a three-way breakup.
//!
//! # Calculation
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Area term: area × base rate × finish × location × timeline |
//! | 2    | Home/turnkey add-ons: kitchen, bedrooms, living/dining, wardrobes, false ceiling |
//! | 3    | Office add-ons: workstations |
//! | 4    | Total: step 1 + step 2 + step 3 |
//! | 5    | Range: total × 0.9 and total × 1.1, rounded |
//! | 6    | Breakup: design 8%, material 62%, execution 30%, each rounded |
//! | 7    | Timeline: 45 working days for fast, 75 for standard |
//!
//! Every add-on is scaled by the finish multiplier only. Architecture and
//! retail projects, and the flooring upgrade and display unit flags, are
//! priced purely by area.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::{EstimateInput, calculate_estimate};
//!
//! let input = EstimateInput::default();
//! let result = calculate_estimate(&input).unwrap();
//!
//! assert_eq!(result.min, dec!(3226500));
//! assert_eq!(result.max, dec!(3943500));
//! assert_eq!(result.timeline_days, 75);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{checked_product, checked_round_whole};
use crate::calculations::rates::{
    self, BEDROOM_ADDON, DESIGN_SHARE, EXECUTION_SHARE, FALSE_CEILING_RATE, KITCHEN_ADDON,
    LIVING_DINING_ADDON, MATERIAL_SHARE, RANGE_HIGH, RANGE_LOW, WARDROBE_ADDON, WORKSTATION_ADDON,
};
use crate::{CostBreakup, EstimateInput, EstimateResult, ProjectType};

/// Errors that can occur while pricing an estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Strict mode only.
    #[error("area must be non-negative, got {0}")]
    NegativeArea(Decimal),

    /// Strict mode only.
    #[error("{field} must be non-negative, got {value}")]
    NegativeCount { field: &'static str, value: i32 },

    /// The inputs are too large to price with decimal arithmetic.
    #[error("estimate arithmetic overflowed")]
    Overflow,
}

/// Prices estimate inputs against the fixed rate tables.
///
/// The default engine accepts any numeric input, including negative area
/// or counts, and prices it as-is. [`PricingEngine::strict`] rejects those
/// before computing anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingEngine {
    strict: bool,
}

impl PricingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that refuses negative area and negative scope counts.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Calculates the cost range, breakup and timeline for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if:
    /// - The engine is strict and the area or a scope count is negative
    /// - The arithmetic overflows
    pub fn calculate(
        &self,
        input: &EstimateInput,
    ) -> Result<EstimateResult, PricingError> {
        if self.strict {
            self.validate(input)?;
        }

        let total_cost = self.total_cost(input)?;
        let (min, max) = self.cost_range(total_cost)?;
        let breakup = self.cost_breakup(total_cost)?;
        let timeline_days = rates::timeline_days(input.timeline);

        debug!(
            project_type = %input.project_type,
            finish_level = %input.finish_level,
            timeline = %input.timeline,
            area = %input.area,
            %total_cost,
            "estimate calculated"
        );

        Ok(EstimateResult {
            min,
            max,
            breakup,
            timeline_days,
        })
    }

    /// The unrounded total the range and breakup are derived from.
    pub fn total_cost(
        &self,
        input: &EstimateInput,
    ) -> Result<Decimal, PricingError> {
        let finish_mult = rates::finish_multiplier(input.finish_level);
        let area_cost = self.area_cost(input, finish_mult)?;
        let addons = self.scope_addons(input, finish_mult)?;

        area_cost.checked_add(addons).ok_or(PricingError::Overflow)
    }

    fn validate(
        &self,
        input: &EstimateInput,
    ) -> Result<(), PricingError> {
        if input.area < Decimal::ZERO {
            return Err(PricingError::NegativeArea(input.area));
        }
        match input.scope.counts().into_iter().find(|(_, value)| *value < 0) {
            Some((field, value)) => Err(PricingError::NegativeCount { field, value }),
            None => Ok(()),
        }
    }

    /// Area × base rate × finish × location × timeline.
    fn area_cost(
        &self,
        input: &EstimateInput,
        finish_mult: Decimal,
    ) -> Result<Decimal, PricingError> {
        if input.known_location().is_none() {
            warn!(location = %input.location, "unknown location, using neutral multiplier");
        }

        checked_product(&[
            input.area,
            rates::base_rate(input.project_type),
            finish_mult,
            rates::location_multiplier(&input.location),
            rates::timeline_multiplier(input.timeline),
        ])
        .ok_or(PricingError::Overflow)
    }

    /// Sum of the scope add-ons priced for this project type.
    fn scope_addons(
        &self,
        input: &EstimateInput,
        finish_mult: Decimal,
    ) -> Result<Decimal, PricingError> {
        let scope = &input.scope;
        let mut items: Vec<Decimal> = Vec::new();

        if input.project_type.has_residential_addons() {
            if scope.kitchen {
                items.push(self.addon(KITCHEN_ADDON, Decimal::ONE, finish_mult)?);
            }
            items.push(self.addon(BEDROOM_ADDON, Decimal::from(scope.bedrooms), finish_mult)?);
            if scope.living_dining {
                items.push(self.addon(LIVING_DINING_ADDON, Decimal::ONE, finish_mult)?);
            }
            items.push(self.addon(WARDROBE_ADDON, Decimal::from(scope.wardrobes), finish_mult)?);
            if scope.false_ceiling {
                items.push(self.addon(FALSE_CEILING_RATE, input.area, finish_mult)?);
            }
        }

        if input.project_type == ProjectType::Office {
            items.push(self.addon(
                WORKSTATION_ADDON,
                Decimal::from(scope.workstations),
                finish_mult,
            )?);
        }

        items
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item))
            .ok_or(PricingError::Overflow)
    }

    /// `quantity` units of `unit_cost`, scaled by the finish multiplier.
    fn addon(
        &self,
        unit_cost: Decimal,
        quantity: Decimal,
        finish_mult: Decimal,
    ) -> Result<Decimal, PricingError> {
        checked_product(&[quantity, unit_cost, finish_mult]).ok_or(PricingError::Overflow)
    }

    /// Rounded ±10% band around the total.
    fn cost_range(
        &self,
        total_cost: Decimal,
    ) -> Result<(Decimal, Decimal), PricingError> {
        Ok((
            self.rounded_share(total_cost, RANGE_LOW)?,
            self.rounded_share(total_cost, RANGE_HIGH)?,
        ))
    }

    fn cost_breakup(
        &self,
        total_cost: Decimal,
    ) -> Result<CostBreakup, PricingError> {
        Ok(CostBreakup {
            design: self.rounded_share(total_cost, DESIGN_SHARE)?,
            material: self.rounded_share(total_cost, MATERIAL_SHARE)?,
            execution: self.rounded_share(total_cost, EXECUTION_SHARE)?,
        })
    }

    fn rounded_share(
        &self,
        total_cost: Decimal,
        share: Decimal,
    ) -> Result<Decimal, PricingError> {
        total_cost
            .checked_mul(share)
            .and_then(checked_round_whole)
            .ok_or(PricingError::Overflow)
    }
}

/// Prices `input` with the default, permissive engine.
pub fn calculate_estimate(input: &EstimateInput) -> Result<EstimateResult, PricingError> {
    PricingEngine::default().calculate(input)
}
