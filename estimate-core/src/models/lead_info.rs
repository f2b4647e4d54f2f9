use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9 \-]*$").expect("mobile pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

const MOBILE_MIN_DIGITS: usize = 10;
const MOBILE_MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("mobile number '{0}' must contain 10 to 15 digits")]
    InvalidMobile(String),

    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
}

/// Contact details captured before an estimate is revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInfo {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub city: String,
}

impl LeadInfo {
    /// Checks that every field is filled in and that the mobile number and
    /// email look plausible. Fields are checked in form order and the first
    /// problem is reported.
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        let fields = [
            ("name", &self.name),
            ("mobile", &self.mobile),
            ("email", &self.email),
            ("city", &self.city),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(LeadValidationError::MissingField(field));
            }
        }

        let mobile = self.mobile.trim();
        let digits = mobile.chars().filter(char::is_ascii_digit).count();
        if !MOBILE_RE.is_match(mobile) || !(MOBILE_MIN_DIGITS..=MOBILE_MAX_DIGITS).contains(&digits)
        {
            return Err(LeadValidationError::InvalidMobile(self.mobile.clone()));
        }

        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(LeadValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}
