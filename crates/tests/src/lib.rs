//! Shared fixtures for the end-to-end intake tests.

use std::io::Cursor;

use triage_agents::IntakeAgent;
use triage_core::{IntakeConfig, ResponseComposer};
use triage_observability::AppMetrics;

/// Console input answering the six prompts in order.
pub struct Answers<'a> {
    pub chief_complaint: &'a str,
    pub timeline: &'a str,
    pub severity: &'a str,
    pub key_details: &'a str,
    pub meds_allergies: &'a str,
    pub worry: &'a str,
}

impl<'a> Answers<'a> {
    pub fn complaint(chief_complaint: &'a str) -> Self {
        Self {
            chief_complaint,
            timeline: "",
            severity: "",
            key_details: "",
            meds_allergies: "",
            worry: "",
        }
    }

    pub fn into_input(self) -> Cursor<String> {
        Cursor::new(format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n",
            self.chief_complaint,
            self.timeline,
            self.severity,
            self.key_details,
            self.meds_allergies,
            self.worry
        ))
    }
}

pub struct SessionRun {
    pub reply: triage_core::AssistantReply,
    pub transcript: String,
}

pub fn run_with<C>(agent: &IntakeAgent<C>, answers: Answers<'_>) -> anyhow::Result<SessionRun>
where
    C: ResponseComposer,
{
    let mut input = answers.into_input();
    let mut output = Vec::new();
    let reply = triage_agents::run_session(agent, &mut input, &mut output)?;

    Ok(SessionRun {
        reply,
        transcript: String::from_utf8(output)?,
    })
}

pub fn default_agent() -> IntakeAgent {
    IntakeAgent::new(IntakeConfig::default(), AppMetrics::shared())
}
