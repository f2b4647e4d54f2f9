//! Plain-text rendering of estimates and rate tables.

use std::fmt;

use estimate_core::calculations::rates;
use estimate_core::format::{format_inr, format_range};
use estimate_core::{
    EstimateInput, EstimateResult, FinishLevel, Location, ProjectType, TimelinePreference,
};

/// The result card: range, timeline, finish and breakup.
pub struct EstimateCard<'a> {
    pub input: &'a EstimateInput,
    pub result: &'a EstimateResult,
}

impl fmt::Display for EstimateCard<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let (input, result) = (self.input, self.result);
        writeln!(f, "Your Project Estimate")?;
        writeln!(
            f,
            "  {} · {} sq ft · {}",
            input.project_type.label(),
            input.area.normalize(),
            input.location
        )?;
        writeln!(f)?;
        writeln!(f, "  Approximate Cost Range  {}", format_range(result.min, result.max))?;
        writeln!(f, "  *Exclusive of GST & Local Taxes")?;
        writeln!(f)?;
        writeln!(f, "  Expected Timeline       {} Working Days", result.timeline_days)?;
        writeln!(
            f,
            "  Finish Selection        {}",
            input.finish_level.label().to_uppercase()
        )?;
        writeln!(f)?;
        writeln!(f, "  Design Cost             {}", format_inr(result.breakup.design))?;
        writeln!(f, "  Materials               {}", format_inr(result.breakup.material))?;
        writeln!(f, "  Execution               {}", format_inr(result.breakup.execution))
    }
}

pub fn render_estimate(
    input: &EstimateInput,
    result: &EstimateResult,
) -> String {
    EstimateCard { input, result }.to_string()
}

/// One line per estimate, for batch output.
pub fn render_summary_line(
    row: usize,
    input: &EstimateInput,
    result: &EstimateResult,
) -> String {
    format!(
        "{row:>3}. {:<15} {:>8} sq ft  {:<12} {:<8} {:<8}  {}  ({} days)",
        input.project_type.label(),
        input.area.normalize(),
        input.location,
        input.finish_level.as_str(),
        input.timeline.as_str(),
        format_range(result.min, result.max),
        result.timeline_days
    )
}

/// The rate tables in readable form.
pub struct RateTables;

impl fmt::Display for RateTables {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Base rate per sq ft")?;
        for project_type in ProjectType::all() {
            writeln!(
                f,
                "  {:<13} {:>6}",
                project_type.as_str(),
                format_inr(rates::base_rate(*project_type))
            )?;
        }

        writeln!(f, "Finish multiplier")?;
        for finish_level in FinishLevel::all() {
            writeln!(
                f,
                "  {:<13} {:>6}",
                finish_level.as_str(),
                rates::finish_multiplier(*finish_level)
            )?;
        }

        writeln!(f, "Location multiplier")?;
        for location in Location::all() {
            writeln!(
                f,
                "  {:<13} {:>6}",
                location.as_str(),
                rates::known_location_multiplier(*location)
            )?;
        }
        writeln!(f, "  {:<13} {:>6}", "(other)", rates::NEUTRAL_MULTIPLIER)?;

        writeln!(f, "Timeline")?;
        for timeline in TimelinePreference::all() {
            writeln!(
                f,
                "  {:<13} {:>6}  {} days",
                timeline.as_str(),
                rates::timeline_multiplier(*timeline),
                rates::timeline_days(*timeline)
            )?;
        }
        Ok(())
    }
}

pub fn render_rates() -> String {
    RateTables.to_string()
}
