use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The six answers gathered during one intake session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intake {
    pub chief_complaint: String,
    pub timeline: String,
    pub severity: String,
    pub key_details: String,
    pub worry: String,
    pub meds_allergies: String,
}

impl Intake {
    /// Text the emergency screen runs over: complaint, details, then timeline.
    pub fn triage_text(&self) -> String {
        [
            self.chief_complaint.as_str(),
            self.key_details.as_str(),
            self.timeline.as_str(),
        ]
        .join(" ")
    }

    pub fn worry_trimmed(&self) -> Option<&str> {
        let worry = self.worry.trim();
        (!worry.is_empty()).then_some(worry)
    }

    pub fn mentions_pain(&self) -> bool {
        self.chief_complaint.to_lowercase().contains("pain")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Emergency,
    NonEmergency,
}

impl Verdict {
    pub fn is_emergency(self) -> bool {
        self == Self::Emergency
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::NonEmergency => "non_emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Mild,
    Emergency,
}

impl PlanKind {
    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Emergency => Self::Emergency,
            Verdict::NonEmergency => Self::Mild,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
    pub verdict: Verdict,
    pub rendered_plan: PlanKind,
    pub shown_plan: PlanKind,
    pub violations: Vec<String>,
    pub fallback_applied: bool,
    pub reply_text: String,
}
