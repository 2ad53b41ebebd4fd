use crate::models::{Intake, PlanKind};

pub const DISCLAIMER: &str =
    "I can provide guidance, but I cannot replace an in-person examination";
pub const REQUIRED_ENDING: &str = "How does this sound to you?";
pub const REMOTE_LIMIT: &str = "This is beyond what I can safely assess remotely";
pub const RECOMMENDATION_LEAD_IN: &str = "Here's what I recommend";
pub const TIMELINE_QUESTION: &str =
    "When did this first start, and has it been getting better, worse, or staying the same?";
pub const PRIORITY_QUESTION: &str = "What concerns you most about this?";

const ACKNOWLEDGEMENT: &str = "I understand. Let's work through this together.";
const PAIN_ACKNOWLEDGEMENT: &str = "That sounds really uncomfortable";

const SELF_CARE_STEPS: [&str; 3] = [
    "1) Drink water regularly today and aim for steady meals.",
    "2) Get extra rest tonight and keep caffeine earlier in the day if you use it.",
    "3) Try a short, gentle walk or light stretching if you feel up to it.",
];

/// Renders the two reply plans for an intake.
pub trait ResponseComposer: Send + Sync {
    fn mild(&self, intake: &Intake, followup_days: u32) -> String;
    fn emergency(&self, intake: &Intake) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTemplates;

impl ResponseComposer for StandardTemplates {
    fn mild(&self, intake: &Intake, followup_days: u32) -> String {
        mild_plan(intake, followup_days)
    }

    fn emergency(&self, intake: &Intake) -> String {
        emergency_plan(intake)
    }
}

pub fn render_plan<C>(composer: &C, kind: PlanKind, intake: &Intake, followup_days: u32) -> String
where
    C: ResponseComposer + ?Sized,
{
    match kind {
        PlanKind::Mild => composer.mild(intake, followup_days),
        PlanKind::Emergency => composer.emergency(intake),
    }
}

pub fn mild_plan(intake: &Intake, followup_days: u32) -> String {
    let mut lines = vec![ACKNOWLEDGEMENT.to_string()];

    if let Some(worry) = intake.worry_trimmed() {
        lines.push(worry_line(worry));
    }

    lines.push(format!("{DISCLAIMER}."));
    lines.push(
        "Based on what you’ve told me, this sounds like a mild issue that can often improve with a few simple steps."
            .to_string(),
    );
    lines.extend(SELF_CARE_STEPS.iter().map(|step| step.to_string()));
    lines.push(format!(
        "If this isn't improving in {followup_days} days, please contact a primary care clinic or urgent care."
    ));
    lines.push(REQUIRED_ENDING.to_string());

    lines.join("\n")
}

pub fn emergency_plan(intake: &Intake) -> String {
    let mut lines = vec![ACKNOWLEDGEMENT.to_string()];

    if intake.mentions_pain() {
        lines.push(PAIN_ACKNOWLEDGEMENT.to_string());
    }

    if let Some(worry) = intake.worry_trimmed() {
        lines.push(worry_line(worry));
    }

    lines.push(
        "Based on what you've told me, your symptoms could be serious and need urgent in-person care."
            .to_string(),
    );
    lines.push(REMOTE_LIMIT.to_string());
    lines.push(format!(
        "{RECOMMENDATION_LEAD_IN}: Call emergency services now. If you can, sit upright, unlock your door, and keep your phone on speaker. If someone is nearby, ask them to stay with you. Do not drive yourself."
    ));
    lines.push(format!("{DISCLAIMER}."));
    lines.push(REQUIRED_ENDING.to_string());

    lines.join("\n")
}

fn worry_line(worry: &str) -> String {
    format!("It’s completely understandable that you’re concerned about {worry}.")
}
