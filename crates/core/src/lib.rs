pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod policy;
pub mod triage;

pub use config::{IntakeConfig, DEFAULT_FOLLOWUP_DAYS};
pub use error::{IntakeError, IntakeResult};
pub use models::*;
pub use planner::{
    emergency_plan, mild_plan, render_plan, ResponseComposer, StandardTemplates, DISCLAIMER,
    PRIORITY_QUESTION, RECOMMENDATION_LEAD_IN, REMOTE_LIMIT, REQUIRED_ENDING, TIMELINE_QUESTION,
};
pub use policy::{
    enforce_language_rules, EscalationMode, PolicyEngine, PolicyGateResult, PolicySet,
    PolicyViolation, BANNED_PHRASES,
};
pub use triage::{classify_intake, looks_like_emergency, matched_triggers, EMERGENCY_TRIGGERS};
