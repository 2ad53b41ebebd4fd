use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Intake, Verdict};

/// Red-flag phrases, matched against lowercased text.
pub const EMERGENCY_TRIGGERS: &[&str] = &[
    r"\bchest pain\b",
    r"\bchest pressure\b",
    r"\bpressure in (my|the) chest\b",
    r"\bchest (hurts|is hurting|aches)\b",
    r"\btrouble breathing\b",
    r"\bdifficulty breathing\b",
    r"\bcan'?t breathe\b",
    r"\bshortness of breath\b",
    r"\bblue lips\b",
    r"\bfainted\b|\bpassed out\b|\bfainting\b",
    r"\bface droop\b|\bslurred speech\b|\bcan'?t speak\b",
    r"\bone[- ]sided weakness\b|\bweakness on one side\b|\bnumb(ness)? on one side\b",
    r"\bseizure\b",
    r"\bworst headache\b",
    r"\buncontrolled bleeding\b",
];

static COMPILED_TRIGGERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    EMERGENCY_TRIGGERS
        .iter()
        .map(|pattern| {
            (
                *pattern,
                Regex::new(pattern).expect("valid emergency trigger regex"),
            )
        })
        .collect()
});

pub fn looks_like_emergency(text: &str) -> bool {
    let lower = text.to_lowercase();
    COMPILED_TRIGGERS
        .iter()
        .any(|(_, regex)| regex.is_match(&lower))
}

/// Every trigger pattern that matches, in list order.
pub fn matched_triggers(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    COMPILED_TRIGGERS
        .iter()
        .filter(|(_, regex)| regex.is_match(&lower))
        .map(|(pattern, _)| *pattern)
        .collect()
}

pub fn classify_intake(intake: &Intake) -> Verdict {
    if looks_like_emergency(&intake.triage_text()) {
        Verdict::Emergency
    } else {
        Verdict::NonEmergency
    }
}
