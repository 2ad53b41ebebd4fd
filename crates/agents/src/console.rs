use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use triage_core::{
    AssistantReply, Intake, IntakeError, IntakeResult, ResponseComposer, DISCLAIMER,
    PRIORITY_QUESTION, TIMELINE_QUESTION,
};

use crate::IntakeAgent;

const CHIEF_COMPLAINT_PROMPT: &str = "What brings you in today?";
const SEVERITY_PROMPT: &str = "How bad is it right now on a 0 to 10 scale?";
const DETAILS_PROMPT: &str = "What else is happening with it (for example: where it is, what makes it better or worse, and any other symptoms)?";
const MEDS_PROMPT: &str = "Any medicines you take regularly, and any allergies?";
const DELIMITER: &str = "---";

/// Greets the user, then asks the six intake questions in order.
pub fn collect_intake<R, W>(reader: &mut R, writer: &mut W) -> IntakeResult<Intake>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Hi, I’m here to help. {DISCLAIMER}.")?;

    let chief_complaint = ask(reader, writer, CHIEF_COMPLAINT_PROMPT)?;
    let timeline = ask(reader, writer, TIMELINE_QUESTION)?;
    let severity = ask(reader, writer, SEVERITY_PROMPT)?;
    let key_details = ask(reader, writer, DETAILS_PROMPT)?;
    let meds_allergies = ask(reader, writer, MEDS_PROMPT)?;
    let worry = ask(reader, writer, PRIORITY_QUESTION)?;

    Ok(Intake {
        chief_complaint,
        timeline,
        severity,
        key_details,
        worry,
        meds_allergies,
    })
}

fn ask<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> IntakeResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt} ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(IntakeError::InputClosed {
            question: prompt.to_string(),
        });
    }

    Ok(line.trim().to_string())
}

/// Prints the gate findings (on fallback) and the delimited reply.
pub fn render_reply<W>(writer: &mut W, reply: &AssistantReply) -> std::io::Result<()>
where
    W: Write,
{
    if reply.fallback_applied {
        writeln!(writer, "\n[Internal check] Output violates constraints:")?;
        for violation in &reply.violations {
            writeln!(writer, "- {violation}")?;
        }
        writeln!(
            writer,
            "\n[Internal check] Refusing to display unsafe/noncompliant output.\n"
        )?;
    }

    writeln!(writer, "\n{DELIMITER}\n")?;
    writeln!(writer, "{}", reply.reply_text)?;
    writeln!(writer, "\n{DELIMITER}\n")?;
    writer.flush()
}

pub fn run_session<C, R, W>(
    agent: &IntakeAgent<C>,
    reader: &mut R,
    writer: &mut W,
) -> Result<AssistantReply>
where
    C: ResponseComposer,
    R: BufRead,
    W: Write,
{
    let intake = collect_intake(reader, writer).context("failed collecting intake answers")?;
    let reply = agent.respond(&intake);
    render_reply(writer, &reply).context("failed writing reply")?;
    Ok(reply)
}
