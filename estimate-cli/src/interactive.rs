//! Line-based front end for the estimate wizard.
//!
//! Each step prints its prompts and reads answers one line at a time.
//! Typing `back` at a step's first prompt returns to the previous step;
//! an empty answer keeps the value shown in brackets.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use estimate_core::wizard::{EstimateWizard, ScopeField, WizardError, WizardStep};
use estimate_core::{FinishLevel, LeadInfo, Location, ProjectType, TimelinePreference};
use tracing::debug;

use crate::utils::parse_yes_no;

const BACK: &str = "back";
const MAX_BEDROOMS: i32 = 20;

/// What the visitor asked for at the end of a step.
enum Nav {
    Next,
    Back,
    Stay,
}

/// Terminal I/O for one wizard session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self { input, output }
    }

    /// Drives `wizard` until it reaches the result step.
    ///
    /// # Errors
    ///
    /// Fails if input ends early, on I/O errors, or if the pricing engine
    /// rejects the inputs.
    pub fn run(
        &mut self,
        wizard: &mut EstimateWizard,
    ) -> Result<()> {
        loop {
            let step = wizard.step();
            if step == WizardStep::Result {
                return Ok(());
            }

            let (current, total) = wizard.progress();
            writeln!(self.output, "\nStep {current} of {total}: {}", step.title())?;

            let nav = match step {
                WizardStep::ProjectType => self.project_type_step(wizard)?,
                WizardStep::PropertyDetails => self.property_step(wizard)?,
                WizardStep::Scope => self.scope_step(wizard)?,
                WizardStep::FinishLevel => self.finish_step(wizard)?,
                WizardStep::Contact => self.contact_step(wizard)?,
                WizardStep::Result => Nav::Stay,
            };

            match nav {
                Nav::Next => {
                    wizard.next()?;
                }
                Nav::Back => {
                    wizard.back();
                }
                Nav::Stay => {}
            }
            debug!(step = %wizard.step(), "wizard step");
        }
    }

    fn project_type_step(
        &mut self,
        wizard: &mut EstimateWizard,
    ) -> Result<Nav> {
        for (idx, project_type) in ProjectType::all().iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, project_type.label())?;
        }

        let current = wizard.input().project_type;
        loop {
            let answer = self.ask(&format!("Project type [{}]", current.label()))?;
            if answer.is_empty() {
                wizard.select_project_type(current);
                return Ok(Nav::Stay);
            }
            match choose(ProjectType::all(), &answer, |p| p.as_str()) {
                Some(project_type) => {
                    wizard.select_project_type(project_type);
                    return Ok(Nav::Stay);
                }
                None => writeln!(self.output, "  Pick a number from the list.")?,
            }
        }
    }

    fn property_step(
        &mut self,
        wizard: &mut EstimateWizard,
    ) -> Result<Nav> {
        let locations: Vec<&str> = Location::all().iter().map(|l| l.as_str()).collect();
        writeln!(self.output, "  Locations: {}", locations.join(", "))?;

        let location = self.ask(&format!("Location [{}]", wizard.input().location))?;
        if location.eq_ignore_ascii_case(BACK) {
            return Ok(Nav::Back);
        }
        if !location.is_empty() {
            wizard.set_location(location);
        }

        let area = self.ask(&format!(
            "Built-up area in sq ft [{}]",
            wizard.input().area.normalize()
        ))?;
        if !area.is_empty() {
            wizard.set_area_text(&area);
        }

        Ok(Nav::Next)
    }

    fn scope_step(
        &mut self,
        wizard: &mut EstimateWizard,
    ) -> Result<Nav> {
        let fields = wizard.scope_fields();
        if fields.is_empty() {
            writeln!(self.output, "  No scope options for this project type.")?;
        }

        let mut first = true;
        for field in fields {
            let scope = &wizard.input().scope;
            let shown = match field {
                ScopeField::Kitchen => yes_no(scope.kitchen),
                ScopeField::FalseCeiling => yes_no(scope.false_ceiling),
                ScopeField::FlooringUpgrade => yes_no(scope.flooring_upgrade),
                ScopeField::Bedrooms => scope.bedrooms.to_string(),
                ScopeField::Workstations => scope.workstations.to_string(),
            };

            let answer = loop {
                let answer = self.ask(&format!("{} [{shown}]", field.label()))?;
                if first && answer.eq_ignore_ascii_case(BACK) {
                    return Ok(Nav::Back);
                }
                if answer.is_empty() || apply_scope(wizard, *field, &answer) {
                    break answer;
                }
                writeln!(self.output, "  Please answer y/n or a whole number.")?;
            };
            debug!(field = field.label(), %answer, "scope answer");
            first = false;
        }

        Ok(Nav::Next)
    }

    fn finish_step(
        &mut self,
        wizard: &mut EstimateWizard,
    ) -> Result<Nav> {
        for (idx, finish_level) in FinishLevel::all().iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {:<8} {}",
                idx + 1,
                finish_level.label(),
                finish_level.description()
            )?;
        }

        loop {
            let current = wizard.input().finish_level;
            let answer = self.ask(&format!("Finish level [{}]", current.label()))?;
            if answer.eq_ignore_ascii_case(BACK) {
                return Ok(Nav::Back);
            }
            if answer.is_empty() {
                break;
            }
            match choose(FinishLevel::all(), &answer, |f| f.as_str()) {
                Some(finish_level) => {
                    wizard.set_finish_level(finish_level);
                    break;
                }
                None => writeln!(self.output, "  Pick a number from the list.")?,
            }
        }

        loop {
            let current = wizard.input().timeline;
            let answer = self.ask(&format!("Timeline, standard or fast [{current}]"))?;
            if answer.is_empty() {
                break;
            }
            match TimelinePreference::parse(&answer) {
                Some(timeline) => {
                    wizard.set_timeline(timeline);
                    break;
                }
                None => writeln!(self.output, "  Answer standard or fast.")?,
            }
        }

        Ok(Nav::Next)
    }

    fn contact_step(
        &mut self,
        wizard: &mut EstimateWizard,
    ) -> Result<Nav> {
        let name = self.ask("Full Name")?;
        if name.eq_ignore_ascii_case(BACK) {
            return Ok(Nav::Back);
        }
        let lead = LeadInfo {
            name,
            mobile: self.ask("Mobile Number")?,
            email: self.ask("Email Address")?,
            city: self.ask("City")?,
        };
        wizard.set_lead(lead);

        match wizard.submit() {
            Ok(_) => Ok(Nav::Stay),
            Err(WizardError::InvalidLead(err)) => {
                writeln!(self.output, "  {err}. Please try again.")?;
                Ok(Nav::Stay)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Prints `question` and returns the trimmed answer.
    fn ask(
        &mut self,
        question: &str,
    ) -> Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended before the estimate was complete");
        }
        Ok(line.trim().to_string())
    }
}

/// Applies one scope answer. Returns false if the answer is unusable.
fn apply_scope(
    wizard: &mut EstimateWizard,
    field: ScopeField,
    answer: &str,
) -> bool {
    let scope = &wizard.input().scope;
    match field {
        ScopeField::Kitchen | ScopeField::FalseCeiling | ScopeField::FlooringUpgrade => {
            let Some(wanted) = parse_yes_no(answer) else {
                return false;
            };
            let current = match field {
                ScopeField::Kitchen => scope.kitchen,
                ScopeField::FalseCeiling => scope.false_ceiling,
                _ => scope.flooring_upgrade,
            };
            if wanted != current {
                match field {
                    ScopeField::Kitchen => wizard.toggle_kitchen(),
                    ScopeField::FalseCeiling => wizard.toggle_false_ceiling(),
                    _ => wizard.toggle_flooring_upgrade(),
                }
            }
            true
        }
        ScopeField::Bedrooms => match answer.trim().parse::<i32>() {
            Ok(wanted) if (0..=MAX_BEDROOMS).contains(&wanted) => {
                while wizard.input().scope.bedrooms < wanted {
                    wizard.increment_bedrooms();
                }
                while wizard.input().scope.bedrooms > wanted {
                    wizard.decrement_bedrooms();
                }
                true
            }
            _ => false,
        },
        ScopeField::Workstations => match answer.trim().parse::<i32>() {
            Ok(wanted) => {
                wizard.set_workstations(wanted);
                true
            }
            Err(_) => false,
        },
    }
}

/// Accepts a 1-based list number or an id.
fn choose<T: Copy>(
    options: &[T],
    answer: &str,
    id: impl Fn(&T) -> &'static str,
) -> Option<T> {
    if let Ok(number) = answer.parse::<usize>() {
        return number.checked_sub(1).and_then(|idx| options.get(idx)).copied();
    }
    options
        .iter()
        .find(|option| id(*option).eq_ignore_ascii_case(answer))
        .copied()
}

fn yes_no(value: bool) -> String {
    String::from(if value { "y" } else { "n" })
}
