//! # Deployment Variants
//!
//! The chatbot ships as three deployments (general company site, HRMS product,
//! school ERP product). They share every piece of logic and differ only in the
//! data assembled here: base URL, topic catalog, microbots, gate keywords,
//! greetings and button replies.

mod buttons;
mod company;
mod hrms;
mod school;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::matcher::KeywordRule;
use crate::microbots::MicrobotRegistry;
use crate::topics::TopicCatalog;

/// Phrases answered with the greeting reply when they are the whole message
pub const GREETINGS: [&str; 7] = [
    "hi",
    "hello",
    "hlo",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

pub const GREETING_REPLY: &str = "Hi, I'm chatbot assistant. How can I help you today?";

pub const DEFAULT_REPLY: &str = "Please contact admin for more details.";

/// Which deployment to run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// General software company site
    #[default]
    Company,
    /// HRMS product site
    Hrms,
    /// School ERP product site
    School,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Company => "company",
            Variant::Hrms => "hrms",
            Variant::School => "school",
        }
    }

    /// Site crawled and fetched when no override is configured
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Variant::Company => company::BASE_URL,
            Variant::Hrms => hrms::BASE_URL,
            Variant::School => school::BASE_URL,
        }
    }

    /// Assemble the deployment's data around `base_url`
    pub fn config(self, base_url: Url) -> VariantConfig {
        match self {
            Variant::Company => company::config(base_url),
            Variant::Hrms => hrms::config(base_url),
            Variant::School => school::config(base_url),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "company" => Ok(Variant::Company),
            "hrms" => Ok(Variant::Hrms),
            "school" => Ok(Variant::School),
            other => Err(format!("unknown variant '{}' (expected company, hrms or school)", other)),
        }
    }
}

/// Literal button label and its reply
#[derive(Debug, Clone)]
pub struct ButtonReply {
    pub label: &'static str,
    pub reply: &'static str,
}

/// Everything that distinguishes one deployment from another
#[derive(Debug, Clone)]
pub struct VariantConfig {
    pub variant: Variant,
    pub topics: Arc<TopicCatalog>,
    pub microbots: MicrobotRegistry,
    pub company_keywords: KeywordRule<&'static str>,
    pub greetings: Vec<&'static str>,
    pub greeting_reply: &'static str,
    pub default_reply: &'static str,
    pub buttons: Vec<ButtonReply>,
    pub button_guidance: &'static str,
}

impl VariantConfig {
    pub fn base_url(&self) -> &Url {
        self.topics.base_url()
    }

    /// Whole-message greeting check; `message` is expected to be trimmed
    pub fn is_greeting(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.greetings.iter().any(|g| *g == lowered)
    }

    /// Broad check deciding whether a live page fetch is worthwhile
    pub fn is_company_related(&self, message: &str) -> bool {
        self.company_keywords.matches(message)
    }

    pub fn has_buttons(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// Reply for a button press; unknown labels get the guidance text.
    /// `None` when this deployment has no buttons.
    pub fn button_reply(&self, button: &str) -> Option<&'static str> {
        if !self.has_buttons() {
            return None;
        }
        let lowered = button.to_lowercase();
        let reply = self
            .buttons
            .iter()
            .find(|b| b.label == lowered)
            .map(|b| b.reply)
            .unwrap_or(self.button_guidance);
        Some(reply)
    }
}
