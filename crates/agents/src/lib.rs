pub mod console;

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use triage_core::{
    classify_intake, matched_triggers, render_plan, AssistantReply, Intake, IntakeConfig,
    PlanKind, PolicyEngine, ResponseComposer, StandardTemplates,
};
use triage_observability::AppMetrics;
use uuid::Uuid;

pub use console::{collect_intake, render_reply, run_session};

/// Runs one intake through triage, rendering and the compliance gate.
///
/// Any policy violation in the rendered plan swaps it for the composer's
/// emergency plan. The substitute is shown as-is and never re-checked.
#[derive(Clone)]
pub struct IntakeAgent<C = StandardTemplates>
where
    C: ResponseComposer,
{
    config: IntakeConfig,
    policy_engine: PolicyEngine,
    composer: C,
    metrics: Arc<AppMetrics>,
}

impl IntakeAgent<StandardTemplates> {
    pub fn new(config: IntakeConfig, metrics: Arc<AppMetrics>) -> Self {
        Self::with_composer(config, StandardTemplates, metrics)
    }
}

impl<C> IntakeAgent<C>
where
    C: ResponseComposer,
{
    pub fn with_composer(config: IntakeConfig, composer: C, metrics: Arc<AppMetrics>) -> Self {
        Self {
            config,
            policy_engine: PolicyEngine::new(config.policy_set()),
            composer,
            metrics,
        }
    }

    #[instrument(skip(self, intake))]
    pub fn respond(&self, intake: &Intake) -> AssistantReply {
        self.metrics.inc_session();
        let session_id = Uuid::new_v4().to_string();

        let verdict = classify_intake(intake);
        if verdict.is_emergency() {
            self.metrics.inc_emergency();
            debug!(
                session_id = %session_id,
                triggers = ?matched_triggers(&intake.triage_text()),
                "emergency triggers matched"
            );
        }

        let rendered_plan = PlanKind::for_verdict(verdict);
        let rendered = render_plan(
            &self.composer,
            rendered_plan,
            intake,
            self.config.followup_days(),
        );

        let gate = self.policy_engine.enforce_language_rules(&rendered);
        let violations = gate.descriptions();

        let (shown_plan, reply_text) = if gate.passed {
            (rendered_plan, rendered)
        } else {
            self.metrics.inc_fallback();
            self.metrics.add_violations(violations.len());
            warn!(
                session_id = %session_id,
                rendered_plan = rendered_plan.as_code(),
                violations = ?violations,
                "rendered plan failed compliance gate, falling back to emergency plan"
            );
            (PlanKind::Emergency, self.composer.emergency(intake))
        };

        info!(
            session_id = %session_id,
            verdict = verdict.as_code(),
            shown_plan = shown_plan.as_code(),
            violations = violations.len(),
            fallback = !gate.passed,
            escalation_mode = ?self.config.escalation_mode(),
            "intake handled"
        );

        AssistantReply {
            session_id,
            generated_at: Utc::now(),
            verdict,
            rendered_plan,
            shown_plan,
            violations,
            fallback_applied: !gate.passed,
            reply_text,
        }
    }
}
