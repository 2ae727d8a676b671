//! Terminal session loop.
//!
//! Drives `AwaitingDomainChoice -> AwaitingQuery (loop) -> Terminated`:
//! one domain menu read, then a query loop that dispatches each non-empty
//! line through the engine and prints the result. Remote failures are
//! rendered inline and the loop continues; only quit/exit, interrupt, EOF,
//! or an invalid domain choice end the session.
//!
//! The loop is written against [`LineSource`] and `io::Write` so the
//! transcript behavior is unit-testable without a terminal.

use std::io::Write;

use console::style;

use wingman_core::chat::inline_error_text;
use wingman_types::persona::Domain;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::input::{ChatInput, InputEvent, LineSource};

/// What a submitted query line means.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryAction {
    /// End the session (`quit`/`exit`, case-insensitive).
    Quit,
    /// Empty or whitespace-only; warn and re-prompt.
    Empty,
    /// Dispatch this text to the engine.
    Ask(String),
}

/// Map a domain menu line to a domain. Only the literal tokens `1` and `2`
/// (after trim) are recognized.
pub fn parse_domain_choice(line: &str) -> Option<Domain> {
    match line.trim() {
        "1" => Some(Domain::Aviation),
        "2" => Some(Domain::Automobile),
        _ => None,
    }
}

/// Classify a query-prompt line.
pub fn classify_query(line: &str) -> QueryAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return QueryAction::Empty;
    }
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return QueryAction::Quit;
    }
    QueryAction::Ask(trimmed.to_string())
}

/// Run the interactive terminal chat against real stdin/stdout.
pub async fn run_chat(state: &AppState) -> anyhow::Result<()> {
    print_welcome_banner(&state.engine.config().model, state.engine.provider_name());

    let (mut input, _writer) = ChatInput::new("  ".to_string())
        .map_err(|e| anyhow::anyhow!("failed to initialize terminal input: {e}"))?;
    let mut stdout = std::io::stdout();
    run_session(state, &mut input, &mut stdout).await
}

/// The session loop proper, generic over input source and output sink.
pub async fn run_session<I, W>(state: &AppState, input: &mut I, out: &mut W) -> anyhow::Result<()>
where
    I: LineSource,
    W: Write,
{
    // AwaitingDomainChoice
    writeln!(out, "  Select the domain of your query:")?;
    writeln!(out, "  1. Aviation ✈️")?;
    writeln!(out, "  2. Automobile 🚗")?;
    input.set_prompt("  Enter 1 or 2: ");

    let domain = match input.next_event().await {
        InputEvent::Line(line) => match parse_domain_choice(&line) {
            Some(domain) => domain,
            None => {
                // No retry: an unrecognized choice ends the session.
                writeln!(
                    out,
                    "  {} Invalid selection. Restart and choose 1 or 2.",
                    style("✗").red().bold()
                )?;
                return Ok(());
            }
        },
        InputEvent::Eof | InputEvent::Interrupted => {
            writeln!(out, "\n  {}", style("👋 Program terminated by user.").dim())?;
            return Ok(());
        }
    };

    let persona = state.catalog.get(domain).clone();
    let query_prompt = format!("  Enter your {domain} query (or 'quit' to exit): ");
    input.set_prompt(&query_prompt);

    // AwaitingQuery
    loop {
        match input.next_event().await {
            InputEvent::Eof | InputEvent::Interrupted => {
                writeln!(out, "\n  {}", style("👋 Program terminated by user.").dim())?;
                break;
            }
            InputEvent::Line(line) => match classify_query(&line) {
                QueryAction::Quit => {
                    writeln!(out, "  {}", style("👋 Goodbye!").dim())?;
                    break;
                }
                QueryAction::Empty => {
                    writeln!(out, "  {} Please enter a valid query.", style("!").yellow().bold())?;
                }
                QueryAction::Ask(query) => {
                    let spinner = indicatif::ProgressBar::new_spinner();
                    spinner.set_style(
                        indicatif::ProgressStyle::default_spinner()
                            .template("{spinner:.cyan} {msg}")
                            .expect("static spinner template"),
                    );
                    spinner.set_message("thinking...");
                    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                    let reply = match state.engine.ask(&persona.instruction, &query).await {
                        Ok(text) => text,
                        Err(err) => inline_error_text(&err),
                    };
                    spinner.finish_and_clear();

                    writeln!(out)?;
                    writeln!(out, "  {} {}", style("🧠 Response:").cyan().bold(), reply)?;
                    writeln!(out)?;
                }
            },
        }
    }

    Ok(())
}
