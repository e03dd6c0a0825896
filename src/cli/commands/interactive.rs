//! Implementation of the `menu-roulette interactive` command.
//!
//! The staged flow: the shortlist is shown first, then the user decides
//! whether to spin, regenerate, or quit. After the winner is revealed the
//! user may start over with the same inputs.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use console::{style, Term};

use super::{build_session, context_summary, generate, spin, Generation, SituationArgs, Spin};
use crate::cli::output::{SpinnerReveal, TableFormatter};
use crate::domain::models::{Config, Stage};
use crate::services::SpinSettings;

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub situation: SituationArgs,
}

/// What the user asked for at a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Spin,
    Regenerate,
    Restart,
    Quit,
}

/// Map a key press to a choice valid in `stage`.
pub fn parse_choice(stage: Stage, key: char) -> Option<Choice> {
    match (stage, key.to_ascii_lowercase()) {
        (_, 'q' | '\u{3}') => Some(Choice::Quit),
        (Stage::CandidatesReady, 's' | ' ') => Some(Choice::Spin),
        (Stage::CandidatesReady | Stage::Idle, 'r') => Some(Choice::Regenerate),
        (Stage::WinnerRevealed, 'r') => Some(Choice::Restart),
        _ => None,
    }
}

/// Prompt line offered in `stage`
pub const fn prompt_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Idle => "[r] 다시 시도  [q] 종료",
        Stage::CandidatesReady => "[s] 룰렛 돌리기  [r] 다시 추천  [q] 종료",
        Stage::WinnerRevealed => "[r] 처음부터  [q] 종료",
    }
}

pub async fn execute(args: InteractiveArgs, config: &Config, json_mode: bool) -> Result<()> {
    if json_mode {
        bail!("interactive mode does not support --json; use `recommend --json`");
    }

    let term = Term::stderr();
    if !term.is_term() {
        bail!("interactive mode needs a terminal; use `recommend` instead");
    }

    let situation = &args.situation;
    let mut session = build_session(
        config,
        situation.strategy(config),
        situation.seed,
        SpinSettings::from(&config.roulette),
    )?;
    let request = situation.request();
    let formatter = TableFormatter::new();

    let mut pending_generation = true;
    loop {
        if pending_generation {
            pending_generation = false;
            match generate(&mut session, &request, situation.hour(), true).await {
                Ok(Generation::Ready(candidates)) => {
                    if let Some(context) = session.state().context() {
                        term.write_line(&context_summary(context, session.model()))?;
                    }
                    term.write_line(&formatter.format_candidates(&candidates))?;
                }
                Ok(Generation::Cancelled) => {}
                Err(err) => {
                    term.write_line(&format!("{} {}", style("✗").red().bold(), err.user_message()))?;
                    if err.is_input() {
                        return Err(err.into());
                    }
                }
            }
        }

        let stage = session.stage();
        term.write_line(&style(prompt_for(stage)).dim().to_string())?;
        let Some(choice) = parse_choice(stage, read_key(&term).await?) else {
            continue;
        };

        match choice {
            Choice::Spin => {
                let mut reveal = SpinnerReveal::new();
                let outcome = spin(&mut session, &mut reveal).await?;
                reveal.finish();
                match outcome {
                    Spin::Winner(winner) => {
                        if let Some(context) = session.state().context() {
                            term.write_line(&formatter.format_winner(&winner, context))?;
                        }
                    }
                    Spin::Cancelled => {
                        let notice = style("룰렛을 멈췄어요. 후보는 그대로 남아 있어요.").yellow();
                        term.write_line(&notice.to_string())?;
                    }
                }
            }
            Choice::Regenerate => pending_generation = true,
            Choice::Restart => {
                session.reset();
                pending_generation = true;
            }
            Choice::Quit => break,
        }
    }

    Ok(())
}

/// Read one key press off the async runtime's worker threads.
async fn read_key(term: &Term) -> Result<char> {
    let term = term.clone();
    tokio::task::spawn_blocking(move || term.read_char())
        .await
        .context("Key reader task failed")?
        .context("Failed to read key press")
}
