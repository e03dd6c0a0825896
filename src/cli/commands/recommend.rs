//! Implementation of the `menu-roulette recommend` command.
//!
//! One full pass: resolve context, build the shortlist, spin, reveal.

use anyhow::{bail, Result};
use clap::Args;

use super::{
    build_session, context_summary, generate, spin, Generation, RecommendationOutput,
    SituationArgs, Spin,
};
use crate::cli::output::{output, SpinnerReveal, TableFormatter};
use crate::domain::models::{Config, InteractionState};
use crate::domain::ports::NullReveal;
use crate::services::SpinSettings;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub situation: SituationArgs,

    /// Skip the roulette animation and reveal the winner at once
    #[arg(long)]
    pub no_spin: bool,
}

pub async fn execute(args: RecommendArgs, config: &Config, json_mode: bool) -> Result<()> {
    let situation = &args.situation;
    let animate = !(args.no_spin || json_mode);
    let settings = if animate {
        SpinSettings::from(&config.roulette)
    } else {
        SpinSettings::instant()
    };

    let mut session = build_session(config, situation.strategy(config), situation.seed, settings)?;
    let request = situation.request();

    let candidates = match generate(&mut session, &request, situation.hour(), !json_mode).await? {
        Generation::Ready(candidates) => candidates,
        Generation::Cancelled => bail!("Cancelled before candidates were ready"),
    };

    let formatter = TableFormatter::new();
    if !json_mode {
        if let Some(context) = session.state().context() {
            println!("{}", context_summary(context, session.model()));
        }
        println!("{}", formatter.format_candidates(&candidates));
    }

    let outcome = if animate {
        let mut reveal = SpinnerReveal::new();
        let outcome = spin(&mut session, &mut reveal).await?;
        reveal.finish();
        outcome
    } else {
        spin(&mut session, &mut NullReveal).await?
    };
    if let Spin::Cancelled = outcome {
        bail!("Cancelled during the roulette spin");
    }

    let InteractionState::WinnerRevealed {
        context,
        candidates,
        winner,
    } = session.state().clone()
    else {
        bail!("Session ended in unexpected stage {}", session.stage());
    };

    if json_mode {
        let result = RecommendationOutput {
            session_id: session.id(),
            strategy: session.strategy(),
            model: session.model().map(str::to_string),
            context,
            candidates,
            winner: Some(winner),
        };
        output(&result, json_mode);
    } else {
        println!("{}", formatter.format_winner(&winner, &context));
    }

    Ok(())
}
