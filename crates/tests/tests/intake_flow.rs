use triage_agents::IntakeAgent;
use triage_core::{
    emergency_plan, enforce_language_rules, mild_plan, EscalationMode, Intake, IntakeConfig,
    PlanKind, PolicyEngine, PolicySet, PolicyViolation, ResponseComposer, Verdict,
    RECOMMENDATION_LEAD_IN, REMOTE_LIMIT, REQUIRED_ENDING,
};
use triage_observability::AppMetrics;
use triage_tests::{default_agent, run_with, Answers};

const FINDINGS_HEADER: &str = "[Internal check] Output violates constraints:";

/// Mild template that forgets to close with the required question.
struct MissingEndingTemplates;

impl ResponseComposer for MissingEndingTemplates {
    fn mild(&self, intake: &Intake, followup_days: u32) -> String {
        mild_plan(intake, followup_days).replace(REQUIRED_ENDING, "")
    }

    fn emergency(&self, intake: &Intake) -> String {
        emergency_plan(intake)
    }
}

#[test]
fn chest_complaint_shows_emergency_plan_verbatim() {
    let run = run_with(&default_agent(), Answers::complaint("my chest hurts")).unwrap();

    let expected = emergency_plan(&Intake {
        chief_complaint: "my chest hurts".to_string(),
        ..Intake::default()
    });

    assert_eq!(run.reply.verdict, Verdict::Emergency);
    assert!(!run.reply.fallback_applied);
    assert_eq!(run.reply.reply_text, expected);
    assert!(!run.transcript.contains(FINDINGS_HEADER));
    assert!(run
        .transcript
        .ends_with(&format!("\n---\n\n{expected}\n\n---\n\n")));
}

#[test]
fn mild_headache_gets_three_day_followup() {
    let run = run_with(
        &default_agent(),
        Answers {
            timeline: "two days, about the same",
            severity: "3",
            worry: "missing work",
            ..Answers::complaint("mild headache for two days")
        },
    )
    .unwrap();

    assert_eq!(run.reply.verdict, Verdict::NonEmergency);
    assert_eq!(run.reply.shown_plan, PlanKind::Mild);
    assert!(run.reply.violations.is_empty());
    assert!(run.reply.reply_text.contains("improving in 3 days"));
    assert!(run
        .reply
        .reply_text
        .contains("concerned about missing work."));
    assert!(enforce_language_rules(&run.reply.reply_text).passed);
}

#[test]
fn red_flag_in_details_escalates() {
    let run = run_with(
        &default_agent(),
        Answers {
            key_details: "I nearly Passed Out on the stairs",
            ..Answers::complaint("dizzy spells")
        },
    )
    .unwrap();

    assert_eq!(run.reply.verdict, Verdict::Emergency);
    assert!(run.reply.reply_text.contains(REMOTE_LIMIT));
}

#[test]
fn malformed_template_is_replaced_by_emergency_plan() {
    let metrics = AppMetrics::shared();
    let agent = IntakeAgent::with_composer(
        IntakeConfig::default(),
        MissingEndingTemplates,
        metrics.clone(),
    );

    let run = run_with(&agent, Answers::complaint("mild headache for two days")).unwrap();

    assert_eq!(run.reply.verdict, Verdict::NonEmergency);
    assert_eq!(run.reply.rendered_plan, PlanKind::Mild);
    assert_eq!(run.reply.shown_plan, PlanKind::Emergency);
    assert_eq!(
        run.reply.violations,
        vec![PolicyViolation::MissingEnding.to_string()]
    );
    assert_eq!(
        run.reply.reply_text,
        emergency_plan(&Intake {
            chief_complaint: "mild headache for two days".to_string(),
            ..Intake::default()
        })
    );

    assert!(run.transcript.contains(&format!(
        "{FINDINGS_HEADER}\n- Missing required ending: \"{REQUIRED_ENDING}\"\n"
    )));
    assert!(run
        .transcript
        .contains("[Internal check] Refusing to display unsafe/noncompliant output."));
    assert_eq!(metrics.snapshot().fallback_total, 1);
}

#[test]
fn custom_followup_window_flows_into_mild_plan() {
    let agent = IntakeAgent::new(
        IntakeConfig::new(7, EscalationMode::LeadInOnly).unwrap(),
        AppMetrics::shared(),
    );

    let run = run_with(&agent, Answers::complaint("itchy rash")).unwrap();
    assert!(run.reply.reply_text.contains("improving in 7 days"));
}

#[test]
fn closed_input_is_an_error() {
    let agent = default_agent();
    let mut input = std::io::Cursor::new("cough\n");
    let err = triage_agents::run_session(&agent, &mut input, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("input closed"));
}

#[test]
fn escalation_modes_disagree_only_on_calm_recommendations() {
    let calm = format!(
        "{RECOMMENDATION_LEAD_IN}: rest.\n{}.\n{REQUIRED_ENDING}",
        triage_core::DISCLAIMER
    );

    let lead_in_only = PolicyEngine::new(PolicySet {
        escalation_mode: EscalationMode::LeadInOnly,
    });
    let reclassify = PolicyEngine::new(PolicySet {
        escalation_mode: EscalationMode::LeadInAndReclassify,
    });

    assert_eq!(
        lead_in_only.enforce_language_rules(&calm).violations,
        vec![PolicyViolation::MissingEscalationLine]
    );
    assert!(reclassify.enforce_language_rules(&calm).passed);
}

#[test]
fn reply_serializes_for_json_output() {
    let run = run_with(&default_agent(), Answers::complaint("seizure this morning")).unwrap();
    let value = serde_json::to_value(&run.reply).unwrap();

    assert_eq!(value["verdict"], "emergency");
    assert_eq!(value["shown_plan"], "emergency");
    assert_eq!(value["fallback_applied"], false);
}
