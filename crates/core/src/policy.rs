use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::{DISCLAIMER, RECOMMENDATION_LEAD_IN, REMOTE_LIMIT, REQUIRED_ENDING};
use crate::triage::looks_like_emergency;

/// Reassurances and clinical jargon that must never reach the user.
pub const BANNED_PHRASES: &[&str] = &[
    "don't worry",
    "do not worry",
    "hypertension",
    "myocardial",
    "ischemia",
    "dyspnea",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "phrase", rename_all = "snake_case")]
pub enum PolicyViolation {
    BannedPhrase(String),
    MissingEnding,
    MissingDisclaimer,
    MissingEscalationLine,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BannedPhrase(phrase) => {
                write!(f, "Contains banned phrase or jargon: \"{phrase}\"")
            }
            Self::MissingEnding => write!(f, "Missing required ending: \"{REQUIRED_ENDING}\""),
            Self::MissingDisclaimer => write!(f, "Missing disclaimer: \"{DISCLAIMER}\""),
            Self::MissingEscalationLine => {
                write!(f, "Missing escalation safety line: \"{REMOTE_LIMIT}\"")
            }
        }
    }
}

/// When the remote-limitation line becomes mandatory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationMode {
    /// Any text carrying the recommendation lead-in.
    #[default]
    LeadInOnly,
    /// Lead-in present and the text itself trips the emergency screen.
    LeadInAndReclassify,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySet {
    pub escalation_mode: EscalationMode,
}

#[derive(Debug, Clone)]
pub struct PolicyGateResult {
    pub passed: bool,
    pub violations: Vec<PolicyViolation>,
}

impl PolicyGateResult {
    pub fn descriptions(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone)]
pub struct PolicyEngine {
    policies: PolicySet,
}

impl PolicyEngine {
    pub fn new(policies: PolicySet) -> Self {
        Self { policies }
    }

    pub fn enforce_language_rules(&self, text: &str) -> PolicyGateResult {
        let lower = text.to_lowercase();
        let mut violations = BANNED_PHRASES
            .iter()
            .filter(|phrase| lower.contains(**phrase))
            .map(|phrase| PolicyViolation::BannedPhrase(phrase.to_string()))
            .collect::<Vec<_>>();

        if !text.contains(REQUIRED_ENDING) {
            violations.push(PolicyViolation::MissingEnding);
        }

        if !text.contains(DISCLAIMER) {
            violations.push(PolicyViolation::MissingDisclaimer);
        }

        if self.escalation_applies(text) && !text.contains(REMOTE_LIMIT) {
            violations.push(PolicyViolation::MissingEscalationLine);
        }

        PolicyGateResult {
            passed: violations.is_empty(),
            violations,
        }
    }

    fn escalation_applies(&self, text: &str) -> bool {
        if !text.contains(RECOMMENDATION_LEAD_IN) {
            return false;
        }

        match self.policies.escalation_mode {
            EscalationMode::LeadInOnly => true,
            EscalationMode::LeadInAndReclassify => looks_like_emergency(text),
        }
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new(PolicySet::default())
    }
}

pub fn enforce_language_rules(text: &str) -> PolicyGateResult {
    PolicyEngine::default().enforce_language_rules(text)
}
