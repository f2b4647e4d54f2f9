//! Pre-filled chat links for handing a lead over to the messaging service.
//!
//! Links take the form `https://<service>/<recipient>?text=<message>`.
//! Nothing here opens the link; callers decide what to do with it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_range;
use crate::{EstimateInput, EstimateResult, LeadInfo, ParseEnumError};

pub const DEFAULT_SERVICE_URL: &str = "https://wa.me";
pub const DEFAULT_RECIPIENT: &str = "919953330396";

/// Opener used when the visitor types their own message.
pub const GENERIC_OPENER: &str = "Hi, I would like to discuss a project.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingLink {
    pub service_url: String,
    pub recipient: String,
}

impl Default for MessagingLink {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL, DEFAULT_RECIPIENT)
    }
}

impl MessagingLink {
    pub fn new(
        service_url: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            service_url: service_url.into(),
            recipient: recipient.into(),
        }
    }

    /// URL that opens a chat with `message` already typed in.
    ///
    /// ```
    /// use estimate_core::messaging::MessagingLink;
    ///
    /// let link = MessagingLink::new("https://wa.me/", "911234567890");
    /// assert_eq!(
    ///     link.url_for("Hi there"),
    ///     "https://wa.me/911234567890?text=Hi%20there"
    /// );
    /// ```
    pub fn url_for(
        &self,
        message: &str,
    ) -> String {
        format!(
            "{}/{}?text={}",
            self.service_url.trim_end_matches('/'),
            self.recipient,
            urlencoding::encode(message)
        )
    }

    pub fn url_for_quick_reply(
        &self,
        reply: QuickReply,
    ) -> String {
        self.url_for(reply.message())
    }
}

/// Canned chat openers offered in the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickReply {
    Home,
    Office,
    Shop,
    Architecture,
    Expert,
}

impl QuickReply {
    pub fn all() -> &'static [QuickReply] {
        &[
            QuickReply::Home,
            QuickReply::Office,
            QuickReply::Shop,
            QuickReply::Architecture,
            QuickReply::Expert,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
            Self::Shop => "shop",
            Self::Architecture => "architecture",
            Self::Expert => "expert",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|reply| reply.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home Interior Cost",
            Self::Office => "Office Interior",
            Self::Shop => "Shop Interior",
            Self::Architecture => "Architecture Design",
            Self::Expert => "Talk to Expert",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Home => "Hi, I’m interested in Home Interior services. Please share details.",
            Self::Office => {
                "Hi, I’m interested in Office Interior design. I would like to discuss my workspace."
            }
            Self::Shop => {
                "Hi, I’m interested in Retail/Shop Interior design. Please share your portfolio and costs."
            }
            Self::Architecture => {
                "Hi, I’m looking for an Architect for my upcoming project. Can we schedule a call?"
            }
            Self::Expert => "Hi, I want to talk to a design expert from Veer Architects.",
        }
    }
}

impl fmt::Display for QuickReply {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuickReply {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseEnumError::new("quick reply", s))
    }
}

/// Follow-up message summarising an estimate, for the chat hand-off after
/// the result is shown.
pub fn estimate_message(
    input: &EstimateInput,
    result: &EstimateResult,
    lead: &LeadInfo,
) -> String {
    format!(
        "Hi, I'm {name} from {city}. I got an estimate of {range} for a {project} project \
         ({area} sq ft in {location}, {finish} finish, {days} working days). \
         Please reach me on {mobile} or {email}.",
        name = lead.name.trim(),
        city = lead.city.trim(),
        range = format_range(result.min, result.max),
        project = input.project_type.label(),
        area = input.area.normalize(),
        location = input.location,
        finish = input.finish_level.label(),
        days = result.timeline_days,
        mobile = lead.mobile.trim(),
        email = lead.email.trim(),
    )
}
