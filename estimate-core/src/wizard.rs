//! Step-by-step collection of estimate inputs.
//!
//! The wizard mirrors the estimate form: pick a project type, describe the
//! property, choose the scope and finish, leave contact details, then see
//! the result. It holds the inputs between steps and prices them exactly
//! once per [`EstimateWizard::submit`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    EstimateInput, EstimateResult, FinishLevel, LeadInfo, LeadValidationError, PricingEngine,
    PricingError, ProjectType, TimelinePreference,
};

pub const STEP_COUNT: u8 = 6;

pub const MAX_WORKSTATIONS: i32 = 100;
pub const WORKSTATION_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    ProjectType,
    PropertyDetails,
    Scope,
    FinishLevel,
    Contact,
    Result,
}

impl WizardStep {
    /// 1-based position in the flow.
    pub fn number(&self) -> u8 {
        match self {
            Self::ProjectType => 1,
            Self::PropertyDetails => 2,
            Self::Scope => 3,
            Self::FinishLevel => 4,
            Self::Contact => 5,
            Self::Result => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ProjectType => "What are you looking to design?",
            Self::PropertyDetails => "Property Details",
            Self::Scope => "Define Your Scope",
            Self::FinishLevel => "Finish Level",
            Self::Contact => "Contact Details",
            Self::Result => "Your Project Estimate",
        }
    }

    fn following(self) -> Option<Self> {
        match self {
            Self::ProjectType => Some(Self::PropertyDetails),
            Self::PropertyDetails => Some(Self::Scope),
            Self::Scope => Some(Self::FinishLevel),
            Self::FinishLevel => Some(Self::Contact),
            Self::Contact | Self::Result => None,
        }
    }

    fn preceding(self) -> Option<Self> {
        match self {
            Self::ProjectType => None,
            Self::PropertyDetails => Some(Self::ProjectType),
            Self::Scope => Some(Self::PropertyDetails),
            Self::FinishLevel => Some(Self::Scope),
            Self::Contact => Some(Self::FinishLevel),
            Self::Result => Some(Self::Contact),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Scope controls offered for a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeField {
    Kitchen,
    Bedrooms,
    FalseCeiling,
    FlooringUpgrade,
    Workstations,
}

impl ScopeField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kitchen => "Modular Kitchen",
            Self::Bedrooms => "Bedrooms",
            Self::FalseCeiling => "False Ceiling",
            Self::FlooringUpgrade => "Flooring Upgrade",
            Self::Workstations => "Number of Workstations",
        }
    }

    /// Controls shown on the scope step. Retail has none.
    pub fn for_project(project_type: ProjectType) -> &'static [ScopeField] {
        match project_type {
            ProjectType::Office => &[ScopeField::Workstations],
            ProjectType::Retail => &[],
            ProjectType::Architecture | ProjectType::Home | ProjectType::Turnkey => &[
                ScopeField::Kitchen,
                ScopeField::Bedrooms,
                ScopeField::FalseCeiling,
                ScopeField::FlooringUpgrade,
            ],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("contact details are entered last; submit them to see the estimate")]
    SubmitRequired,

    #[error("the estimate has already been shown; reset to start again")]
    AlreadySubmitted,

    #[error("submit is only available on the contact step, not {0}")]
    NotOnContactStep(WizardStep),

    #[error("invalid contact details: {0}")]
    InvalidLead(#[from] LeadValidationError),

    #[error("could not price estimate: {0}")]
    Pricing(#[from] PricingError),
}

/// Holds estimate inputs while the visitor moves through the steps.
#[derive(Debug, Clone)]
pub struct EstimateWizard {
    step: WizardStep,
    input: EstimateInput,
    lead: LeadInfo,
    engine: PricingEngine,
    result: Option<EstimateResult>,
}

impl Default for EstimateWizard {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}

impl EstimateWizard {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            step: WizardStep::ProjectType,
            input: EstimateInput::default(),
            lead: LeadInfo::default(),
            engine,
            result: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// `(current step, total steps)`.
    pub fn progress(&self) -> (u8, u8) {
        (self.step.number(), STEP_COUNT)
    }

    pub fn input(&self) -> &EstimateInput {
        &self.input
    }

    pub fn lead(&self) -> &LeadInfo {
        &self.lead
    }

    pub fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step.following() {
            Some(step) => {
                self.step = step;
                Ok(step)
            }
            None if self.step == WizardStep::Contact => Err(WizardError::SubmitRequired),
            None => Err(WizardError::AlreadySubmitted),
        }
    }

    /// Goes back one step. Does nothing on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(step) = self.step.preceding() {
            self.step = step;
        }
        self.step
    }

    /// Chooses the project type. On the first step this also advances,
    /// like clicking a project card.
    pub fn select_project_type(
        &mut self,
        project_type: ProjectType,
    ) {
        self.input.project_type = project_type;
        if self.step == WizardStep::ProjectType {
            self.step = WizardStep::PropertyDetails;
        }
    }

    pub fn set_property_type(
        &mut self,
        property_type: impl Into<String>,
    ) {
        self.input.property_type = property_type.into();
    }

    pub fn set_location(
        &mut self,
        location: impl Into<String>,
    ) {
        self.input.location = location.into();
    }

    pub fn set_area(
        &mut self,
        area: Decimal,
    ) {
        self.input.area = area;
    }

    /// Sets the area from a text field: keeps the leading integer and falls
    /// back to zero when there is none.
    pub fn set_area_text(
        &mut self,
        text: &str,
    ) {
        self.input.area = parse_leading_integer(text).unwrap_or(Decimal::ZERO);
    }

    /// Scope controls relevant to the current project type.
    pub fn scope_fields(&self) -> &'static [ScopeField] {
        ScopeField::for_project(self.input.project_type)
    }

    pub fn toggle_kitchen(&mut self) {
        self.input.scope.kitchen = !self.input.scope.kitchen;
    }

    pub fn toggle_living_dining(&mut self) {
        self.input.scope.living_dining = !self.input.scope.living_dining;
    }

    pub fn toggle_false_ceiling(&mut self) {
        self.input.scope.false_ceiling = !self.input.scope.false_ceiling;
    }

    pub fn toggle_flooring_upgrade(&mut self) {
        self.input.scope.flooring_upgrade = !self.input.scope.flooring_upgrade;
    }

    pub fn toggle_display_units(&mut self) {
        self.input.scope.display_units = !self.input.scope.display_units;
    }

    pub fn increment_bedrooms(&mut self) {
        self.input.scope.bedrooms = self.input.scope.bedrooms.saturating_add(1);
    }

    /// Never goes below zero.
    pub fn decrement_bedrooms(&mut self) {
        self.input.scope.bedrooms = self.input.scope.bedrooms.saturating_sub(1).max(0);
    }

    pub fn set_wardrobes(
        &mut self,
        wardrobes: i32,
    ) {
        self.input.scope.wardrobes = wardrobes.max(0);
    }

    /// Snaps to the slider: 0 to 100 in steps of 5.
    pub fn set_workstations(
        &mut self,
        workstations: i32,
    ) {
        let clamped = workstations.clamp(0, MAX_WORKSTATIONS);
        self.input.scope.workstations = clamped - clamped % WORKSTATION_STEP;
    }

    pub fn set_finish_level(
        &mut self,
        finish_level: FinishLevel,
    ) {
        self.input.finish_level = finish_level;
    }

    pub fn set_timeline(
        &mut self,
        timeline: TimelinePreference,
    ) {
        self.input.timeline = timeline;
    }

    pub fn set_lead(
        &mut self,
        lead: LeadInfo,
    ) {
        self.lead = lead;
    }

    /// Validates the contact details, prices the inputs and moves to the
    /// result step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError`] if:
    /// - The wizard is not on the contact step
    /// - A contact field is missing or malformed
    /// - The pricing engine rejects the inputs
    pub fn submit(&mut self) -> Result<&EstimateResult, WizardError> {
        if self.step != WizardStep::Contact {
            return Err(WizardError::NotOnContactStep(self.step));
        }
        self.lead.validate()?;

        let result = self.engine.calculate(&self.input)?;
        info!(
            project_type = %self.input.project_type,
            city = %self.lead.city,
            min = %result.min,
            max = %result.max,
            "estimate submitted"
        );

        self.step = WizardStep::Result;
        Ok(&*self.result.insert(result))
    }

    /// Starts over with the default inputs. The pricing engine and the
    /// chosen location are kept.
    pub fn reset(&mut self) {
        debug!("estimate wizard reset");
        let location = std::mem::take(&mut self.input.location);
        *self = Self::new(self.engine);
        self.input.location = location;
    }
}

/// Leading optional sign and digits of `text`, ignoring leading whitespace.
fn parse_leading_integer(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    Decimal::from_str(&trimmed[..sign_len + digits_len]).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn valid_lead() -> LeadInfo {
        LeadInfo {
            name: "Rohan Mehta".to_string(),
            mobile: "9876543210".to_string(),
            email: "rohan@example.com".to_string(),
            city: "Delhi".to_string(),
        }
    }

    fn wizard_at_contact() -> EstimateWizard {
        let mut wizard = EstimateWizard::default();
        wizard.select_project_type(ProjectType::Home);
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard
    }

    // =========================================================================
    // navigation
    // =========================================================================

    #[test]
    fn starts_on_project_type_with_defaults() {
        let wizard = EstimateWizard::default();

        assert_eq!(wizard.step(), WizardStep::ProjectType);
        assert_eq!(wizard.progress(), (1, 6));
        assert_eq!(wizard.input(), &EstimateInput::default());
        assert!(wizard.result().is_none());
    }

    #[test]
    fn selecting_project_type_advances() {
        let mut wizard = EstimateWizard::default();

        wizard.select_project_type(ProjectType::Office);

        assert_eq!(wizard.step(), WizardStep::PropertyDetails);
        assert_eq!(wizard.input().project_type, ProjectType::Office);
    }

    #[test]
    fn selecting_project_type_later_does_not_advance() {
        let mut wizard = wizard_at_contact();

        wizard.select_project_type(ProjectType::Retail);

        assert_eq!(wizard.step(), WizardStep::Contact);
    }

    #[test]
    fn back_on_first_step_stays_put() {
        let mut wizard = EstimateWizard::default();

        assert_eq!(wizard.back(), WizardStep::ProjectType);
    }

    #[test]
    fn back_moves_one_step() {
        let mut wizard = wizard_at_contact();

        assert_eq!(wizard.back(), WizardStep::FinishLevel);
        assert_eq!(wizard.back(), WizardStep::Scope);
    }

    #[test]
    fn next_on_contact_requires_submit() {
        let mut wizard = wizard_at_contact();

        assert_eq!(wizard.next(), Err(WizardError::SubmitRequired));
        assert_eq!(wizard.step(), WizardStep::Contact);
    }

    // =========================================================================
    // input editing
    // =========================================================================

    #[test]
    fn area_text_keeps_leading_integer() {
        let mut wizard = EstimateWizard::default();

        wizard.set_area_text("1450 sq ft");
        assert_eq!(wizard.input().area, dec!(1450));

        wizard.set_area_text("12.75");
        assert_eq!(wizard.input().area, dec!(12));

        wizard.set_area_text("-300");
        assert_eq!(wizard.input().area, dec!(-300));
    }

    #[test]
    fn area_text_without_number_is_zero() {
        let mut wizard = EstimateWizard::default();

        wizard.set_area_text("large");
        assert_eq!(wizard.input().area, Decimal::ZERO);

        wizard.set_area_text("");
        assert_eq!(wizard.input().area, Decimal::ZERO);
    }

    #[test]
    fn bedrooms_never_go_below_zero() {
        let mut wizard = EstimateWizard::default();

        for _ in 0..5 {
            wizard.decrement_bedrooms();
        }
        assert_eq!(wizard.input().scope.bedrooms, 0);

        wizard.increment_bedrooms();
        assert_eq!(wizard.input().scope.bedrooms, 1);
    }

    #[test]
    fn workstations_snap_to_slider() {
        let mut wizard = EstimateWizard::default();

        wizard.set_workstations(23);
        assert_eq!(wizard.input().scope.workstations, 20);

        wizard.set_workstations(250);
        assert_eq!(wizard.input().scope.workstations, 100);

        wizard.set_workstations(-10);
        assert_eq!(wizard.input().scope.workstations, 0);
    }

    #[test]
    fn toggles_flip_scope_flags() {
        let mut wizard = EstimateWizard::default();

        wizard.toggle_kitchen();
        wizard.toggle_flooring_upgrade();

        assert!(!wizard.input().scope.kitchen);
        assert!(wizard.input().scope.flooring_upgrade);
    }

    #[test]
    fn living_dining_and_display_units_toggle() {
        let mut wizard = EstimateWizard::default();

        wizard.toggle_living_dining();
        wizard.toggle_display_units();
        assert!(!wizard.input().scope.living_dining);
        assert!(wizard.input().scope.display_units);

        wizard.toggle_living_dining();
        wizard.toggle_display_units();
        assert!(wizard.input().scope.living_dining);
        assert!(!wizard.input().scope.display_units);
    }

    #[test]
    fn wardrobes_never_go_below_zero() {
        let mut wizard = EstimateWizard::default();

        wizard.set_wardrobes(4);
        assert_eq!(wizard.input().scope.wardrobes, 4);

        wizard.set_wardrobes(-3);
        assert_eq!(wizard.input().scope.wardrobes, 0);
    }

    #[test]
    fn scope_fields_follow_project_type() {
        let mut wizard = EstimateWizard::default();

        wizard.select_project_type(ProjectType::Office);
        assert_eq!(wizard.scope_fields(), &[ScopeField::Workstations]);

        wizard.select_project_type(ProjectType::Retail);
        assert!(wizard.scope_fields().is_empty());

        wizard.select_project_type(ProjectType::Architecture);
        assert_eq!(wizard.scope_fields().len(), 4);
    }

    // =========================================================================
    // submit
    // =========================================================================

    #[test]
    fn submit_prices_and_shows_result() {
        let mut wizard = wizard_at_contact();
        wizard.set_lead(valid_lead());

        let result = *wizard.submit().unwrap();

        assert_eq!(result.min, dec!(3226500));
        assert_eq!(wizard.step(), WizardStep::Result);
        assert_eq!(wizard.progress(), (6, 6));
        assert_eq!(wizard.result(), Some(&result));
        assert_eq!(wizard.next(), Err(WizardError::AlreadySubmitted));
    }

    #[test]
    fn submit_rejects_incomplete_lead() {
        let mut wizard = wizard_at_contact();
        wizard.set_lead(LeadInfo {
            city: String::new(),
            ..valid_lead()
        });

        let result = wizard.submit().map(|r| *r);

        assert_eq!(
            result,
            Err(WizardError::InvalidLead(LeadValidationError::MissingField("city")))
        );
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert!(wizard.result().is_none());
    }

    #[test]
    fn submit_before_contact_step_is_refused() {
        let mut wizard = EstimateWizard::default();
        wizard.set_lead(valid_lead());

        let result = wizard.submit().map(|r| *r);

        assert_eq!(
            result,
            Err(WizardError::NotOnContactStep(WizardStep::ProjectType))
        );
    }

    #[test]
    fn strict_engine_errors_surface_from_submit() {
        let mut wizard = EstimateWizard::new(PricingEngine::strict());
        wizard.select_project_type(ProjectType::Home);
        wizard.set_area_text("-50");
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.set_lead(valid_lead());

        let result = wizard.submit().map(|r| *r);

        assert_eq!(
            result,
            Err(WizardError::Pricing(PricingError::NegativeArea(dec!(-50))))
        );
    }

    #[test]
    fn reset_starts_over_and_keeps_engine_and_location() {
        let mut wizard = EstimateWizard::new(PricingEngine::strict());
        wizard.select_project_type(ProjectType::Turnkey);
        wizard.set_location("Delhi NCR");
        wizard.set_area(dec!(900));

        wizard.reset();

        assert_eq!(wizard.step(), WizardStep::ProjectType);
        assert_eq!(
            wizard.input(),
            &EstimateInput {
                location: "Delhi NCR".to_string(),
                ..EstimateInput::default()
            }
        );
        assert!(wizard.engine.is_strict());
    }

    #[test]
    fn parse_leading_integer_cases() {
        assert_eq!(parse_leading_integer("  42abc"), Some(dec!(42)));
        assert_eq!(parse_leading_integer("+7"), Some(dec!(7)));
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer("abc"), None);
    }

    #[test]
    fn area_text_beyond_i64_keeps_value() {
        let mut wizard = EstimateWizard::default();

        wizard.set_area_text("123456789012345678901 sq ft");

        assert_eq!(wizard.input().area, dec!(123456789012345678901));
    }
}
