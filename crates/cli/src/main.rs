use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use serde_json::json;
use tracing::info;
use triage_agents::{run_session, IntakeAgent};
use triage_core::{
    looks_like_emergency, matched_triggers, EscalationMode, IntakeConfig, PolicyEngine,
    DEFAULT_FOLLOWUP_DAYS,
};
use triage_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "intake")]
#[command(about = "Symptom intake assistant")]
struct Cli {
    /// Days to wait before seeking care in the mild plan.
    #[arg(long, env = "INTAKE_FOLLOWUP_DAYS", default_value_t = DEFAULT_FOLLOWUP_DAYS)]
    followup_days: u32,

    /// Only require the remote-limitation line when the reply itself reads as an emergency.
    #[arg(
        long,
        env = "INTAKE_STRICT_ESCALATION",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    strict_escalation: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat {
        #[arg(long)]
        json: bool,
    },
    Triage {
        text: String,
    },
    Check,
}

impl Cli {
    fn escalation_mode(&self) -> EscalationMode {
        if self.strict_escalation {
            EscalationMode::LeadInAndReclassify
        } else {
            EscalationMode::LeadInOnly
        }
    }
}

fn main() -> Result<ExitCode> {
    init_tracing("triage_cli");
    let cli = Cli::parse();

    let config = IntakeConfig::new(cli.followup_days, cli.escalation_mode())
        .context("invalid --followup-days value")?;

    let metrics = AppMetrics::shared();

    let status = match cli.command.unwrap_or(Command::Chat { json: false }) {
        Command::Chat { json } => {
            let agent = IntakeAgent::new(config, metrics.clone());
            let stdin = io::stdin();
            let stdout = io::stdout();

            let reply = run_session(&agent, &mut stdin.lock(), &mut stdout.lock())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            }
            ExitCode::SUCCESS
        }
        Command::Triage { text } => {
            let verdict = json!({
                "emergency": looks_like_emergency(&text),
                "matched": matched_triggers(&text),
            });
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            ExitCode::SUCCESS
        }
        Command::Check => {
            let mut candidate = String::new();
            io::stdin()
                .read_to_string(&mut candidate)
                .context("failed reading candidate response from stdin")?;

            let result = PolicyEngine::new(config.policy_set()).enforce_language_rules(&candidate);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "passed": result.passed,
                    "violations": result.descriptions(),
                }))?
            );

            if result.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    info!(metrics = ?metrics.snapshot(), "run finished");
    Ok(status)
}
