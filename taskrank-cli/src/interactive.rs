//! Interactive session: queue tasks, pick a strategy, analyze, repeat.
//!
//! Nothing here is fatal. Validation and remote failures land in the
//! session notice, get printed, and the loop carries on.

use anyhow::Result;
use std::io::{BufRead, Write};
use taskrank_client::{AnalysisSession, ScoringBackend};
use taskrank_core::RawTask;
use tracing::debug;

use crate::render;

const HELP: &str = "\
Commands:
  add               add one task (prompted)
  bulk              paste a JSON array of tasks, blank line to finish
  list              show queued tasks
  clear             drop all queued tasks
  strategy [id]     show or change the scoring strategy
  strategies        list available strategies
  analyze           score the queued tasks
  suggest           load saved suggestions
  results           show the last results
  help              this text
  quit              leave
";

/// Read one trimmed line; `None` on EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().ok();
    read_line(input)
}

/// Prompt with a default used when the answer is blank.
fn prompt_or<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: &str,
) -> Result<Option<String>> {
    Ok(prompt(input, out, &format!("{label} [{default}]"))?
        .map(|s| if s.is_empty() { default.to_string() } else { s }))
}

fn print_notice<B: ScoringBackend, W: Write>(session: &AnalysisSession<B>, out: &mut W) -> Result<()> {
    if let Some(n) = session.notice() {
        writeln!(out, "{}", render::notice(n))?;
    }
    Ok(())
}

fn add_task<B: ScoringBackend, R: BufRead, W: Write>(
    session: &mut AnalysisSession<B>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(title) = prompt(input, out, "Title")? else { return Ok(()) };
    let Some(due) = prompt(input, out, "Due date (YYYY-MM-DD, blank for none)")? else { return Ok(()) };
    let Some(hours) = prompt_or(input, out, "Estimated hours", "1")? else { return Ok(()) };
    let Some(importance) = prompt_or(input, out, "Importance 0-10", "5")? else { return Ok(()) };
    let Some(deps) = prompt(input, out, "Dependencies (comma separated)")? else { return Ok(()) };

    let raw = RawTask::from_form(&title, &due, &hours, &importance, &deps);
    match session.add_task(raw) {
        Ok(n) => writeln!(out, "Queued. {n} task(s) waiting.")?,
        Err(e) => debug!(error = %e, "manual entry rejected"),
    }
    print_notice(session, out)
}

fn bulk_import<B: ScoringBackend, R: BufRead, W: Write>(
    session: &mut AnalysisSession<B>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Paste JSON array (blank line to finish)")?;
    session.bulk_mut().set_buffer(String::new());
    while let Some(line) = read_line(input)? {
        if line.is_empty() {
            break;
        }
        session.bulk_mut().push_line(&line);
    }
    if let Err(e) = session.import_bulk() {
        debug!(error = %e, "bulk import rejected");
    }
    print_notice(session, out)
}

pub async fn run<B: ScoringBackend, R: BufRead, W: Write>(
    session: &mut AnalysisSession<B>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "taskrank session. Type 'help' for commands.")?;

    loop {
        write!(out, "[{}] > ", session.strategy())?;
        out.flush().ok();
        let Some(line) = read_line(input)? else { break };

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line.as_str(), ""),
        };

        match cmd {
            "" => {}
            "add" => add_task(session, input, out)?,
            "bulk" => bulk_import(session, input, out)?,
            "list" => write!(out, "{}", render::queue(session.drafts()))?,
            "clear" => {
                session.clear_drafts();
                writeln!(out, "Draft queue cleared.")?;
            }
            "strategy" if arg.is_empty() => {
                let st = session.strategy();
                writeln!(out, "Active strategy: {} ({})", st.id(), st.label())?;
            }
            "strategy" => match session.select_strategy(arg) {
                Ok(st) => writeln!(out, "Strategy set to {} ({})", st.id(), st.label())?,
                Err(_) => print_notice(session, out)?,
            },
            "strategies" => write!(out, "{}", render::strategies(session.strategy()))?,
            "analyze" => {
                writeln!(out, "Analyzing...")?;
                if session.analyze().await.is_ok() {
                    write!(out, "{}", render::results_table(session.results()))?;
                }
                print_notice(session, out)?;
            }
            "suggest" => {
                writeln!(out, "Fetching...")?;
                if session.suggest().await.is_ok() {
                    write!(out, "{}", render::results_table(session.results()))?;
                }
                print_notice(session, out)?;
            }
            "results" => write!(out, "{}", render::results_table(session.results()))?,
            "help" | "?" => write!(out, "{HELP}")?,
            "quit" | "exit" | "q" => break,
            other => writeln!(out, "Unknown command '{other}'. Type 'help'.")?,
        }
    }

    Ok(())
}
