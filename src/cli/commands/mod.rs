//! CLI command implementations.

pub mod init;
pub mod interactive;
pub mod menu;
pub mod recommend;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::cli::output::{create_spinner_with_message, CommandOutput, ProgressBarExt, TableFormatter};
use crate::domain::errors::SessionResult;
use crate::domain::ports::RevealSink;
use crate::domain::models::{
    Budget, Candidate, CandidateSet, Config, Context, Mood, RecommendationRequest, Strategy,
    Weather,
};
use crate::infrastructure::credentials::resolve_api_key;
use crate::infrastructure::gemini::{GeminiClient, GeminiClientConfig};
use crate::services::context_resolver::current_hour;
use crate::services::{GenerativeSource, SelectionEngine, Session, SpinSettings, TabularSource};

/// Situational inputs shared by `recommend` and `interactive`
#[derive(Args, Debug, Clone)]
pub struct SituationArgs {
    /// Current weather
    #[arg(short, long, value_enum)]
    pub weather: Weather,

    /// Current mood
    #[arg(short, long, value_enum)]
    pub mood: Mood,

    /// Budget for this meal
    #[arg(short, long, value_enum)]
    pub budget: Budget,

    /// Where you are (required for AI recommendations)
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Candidate strategy (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Hour of day 0-23 (defaults to local time)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Seed for reproducible jitter and roulette draws
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SituationArgs {
    pub fn request(&self) -> RecommendationRequest {
        RecommendationRequest::new(self.location.clone(), self.weather, self.mood, self.budget)
    }

    pub fn hour(&self) -> u32 {
        self.hour.unwrap_or_else(current_hour)
    }

    pub fn strategy(&self, config: &Config) -> Strategy {
        self.strategy.unwrap_or(config.strategy)
    }
}

/// Wire up a session for `strategy` from configuration
///
/// The generative strategy needs an API key; the tabular one needs nothing.
pub fn build_session(
    config: &Config,
    strategy: Strategy,
    seed: Option<u64>,
    settings: SpinSettings,
) -> Result<Session> {
    let source: Box<dyn crate::domain::ports::CandidateSource> = match strategy {
        Strategy::Generative => {
            let api_key = resolve_api_key(&config.generation)?;
            let client = GeminiClient::new(GeminiClientConfig::from_generation(
                &config.generation,
                api_key,
            ))
            .context("Failed to create Gemini client")?;
            Box::new(
                GenerativeSource::new(Arc::new(client))
                    .with_timeout(Duration::from_secs(config.generation.timeout_secs)),
            )
        }
        Strategy::Tabular => match seed {
            Some(seed) => Box::new(TabularSource::seeded(seed)),
            None => Box::new(TabularSource::new()),
        },
    };

    let engine = match seed {
        Some(seed) => SelectionEngine::seeded(settings, seed.rotate_left(32), seed),
        None => SelectionEngine::new(settings),
    };

    Ok(Session::new(source, engine))
}

/// Outcome of a cancellable generation
#[derive(Debug)]
pub enum Generation {
    Ready(CandidateSet),
    Cancelled,
}

/// Submit inputs, showing a spinner and honouring Ctrl-C
///
/// Cancelling drops the pending call; the session is left idle.
pub async fn generate(
    session: &mut Session,
    request: &RecommendationRequest,
    hour: u32,
    show_progress: bool,
) -> SessionResult<Generation> {
    session.validate(request)?;

    let spinner = show_progress.then(|| {
        create_spinner_with_message(match session.strategy() {
            Strategy::Generative => "AI가 메뉴를 고민하는 중...",
            Strategy::Tabular => "메뉴판을 뒤적이는 중...",
        })
    });

    let outcome = tokio::select! {
        result = session.submit(request, hour) => result.map(Generation::Ready),
        _ = tokio::signal::ctrl_c() => Ok(Generation::Cancelled),
    };

    if let Some(spinner) = spinner {
        match &outcome {
            Ok(Generation::Ready(set)) => spinner.finish_success(format!("후보 {}개 준비 완료", set.len())),
            Ok(Generation::Cancelled) => spinner.finish_warning("취소되었습니다"),
            Err(_) => spinner.finish_error("추천 실패"),
        }
    }

    outcome
}

/// Outcome of a cancellable spin
#[derive(Debug)]
pub enum Spin {
    Winner(Candidate),
    Cancelled,
}

/// Spin the roulette, honouring Ctrl-C during the reveal
///
/// A cancelled spin leaves the shortlist in place.
pub async fn spin(session: &mut Session, sink: &mut dyn RevealSink) -> SessionResult<Spin> {
    tokio::select! {
        result = session.spin(sink) => result.map(Spin::Winner),
        _ = tokio::signal::ctrl_c() => Ok(Spin::Cancelled),
    }
}

/// One-line echo of the resolved context, plus the model when one is used
pub fn context_summary(context: &Context, model: Option<&str>) -> String {
    let mut line = format!("{} {}", context.meal_time.emoji(), context.meal_time.label());
    if !context.location.is_empty() {
        let _ = write!(line, " · 📍 {}", context.location);
    }
    let _ = write!(
        line,
        " · 날씨 {} · 기분 {} · 예산 {}",
        context.weather.label(),
        context.mood.label(),
        context.budget.label()
    );
    if let Some(model) = model {
        let _ = write!(line, " · Powered by {model}");
    }
    line
}

/// Result of a recommendation pass
#[derive(Debug, Serialize)]
pub struct RecommendationOutput {
    pub session_id: Uuid,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub context: Context,
    pub candidates: CandidateSet,
    pub winner: Option<Candidate>,
}

impl CommandOutput for RecommendationOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let mut lines = vec![
            context_summary(&self.context, self.model.as_deref()),
            formatter.format_candidates(&self.candidates),
        ];
        if let Some(winner) = &self.winner {
            lines.push(formatter.format_winner(winner, &self.context));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NullReveal;
    use crate::services::ContextResolver;

    fn tabular_config() -> Config {
        Config {
            strategy: Strategy::Tabular,
            ..Config::default()
        }
    }

    #[test]
    fn test_tabular_session_needs_no_key() {
        temp_env::with_var_unset("GOOGLE_API_KEY", || {
            let session =
                build_session(&tabular_config(), Strategy::Tabular, Some(1), SpinSettings::instant())
                    .unwrap();
            assert_eq!(session.strategy(), Strategy::Tabular);
        });
    }

    #[test]
    fn test_generative_session_requires_key() {
        temp_env::with_var_unset("GOOGLE_API_KEY", || {
            let err = build_session(&Config::default(), Strategy::Generative, None, SpinSettings::instant())
                .err()
                .unwrap();
            assert!(err.to_string().contains("No API key configured"));
        });
    }

    #[test]
    fn test_context_summary() {
        let request = RecommendationRequest::new(" 홍대 ", Weather::Rain, Mood::Tired, Budget::Cheap);
        let context = ContextResolver::new().resolve(12, &request);
        let summary = context_summary(&context, Some("gemini-2.5-pro"));
        assert!(summary.contains("점심"));
        assert!(summary.contains("📍 홍대"));
        assert!(summary.contains("날씨 비"));
        assert!(summary.ends_with("Powered by gemini-2.5-pro"));

        let no_location = RecommendationRequest::new("", Weather::Rain, Mood::Tired, Budget::Cheap);
        let summary = context_summary(&ContextResolver::new().resolve(12, &no_location), None);
        assert!(!summary.contains("📍"));
        assert!(!summary.contains("Powered by"));
    }

    #[tokio::test]
    async fn test_generate_tabular_without_progress() {
        let mut session =
            build_session(&tabular_config(), Strategy::Tabular, Some(3), SpinSettings::instant())
                .unwrap();
        let request = RecommendationRequest::new("", Weather::Clear, Mood::Hungry, Budget::Moderate);

        match generate(&mut session, &request, 19, false).await.unwrap() {
            Generation::Ready(set) => assert_eq!(set.len(), 3),
            Generation::Cancelled => panic!("unexpected cancellation"),
        }
    }

    #[tokio::test]
    async fn test_spin_reveals_winner_from_shortlist() {
        let mut session =
            build_session(&tabular_config(), Strategy::Tabular, Some(8), SpinSettings::instant())
                .unwrap();
        let request = RecommendationRequest::new("", Weather::Snow, Mood::Gloomy, Budget::Cheap);
        let Generation::Ready(shortlist) = generate(&mut session, &request, 8, false).await.unwrap()
        else {
            panic!("unexpected cancellation");
        };

        match spin(&mut session, &mut NullReveal).await.unwrap() {
            Spin::Winner(winner) => assert!(shortlist.iter().any(|c| c == &winner)),
            Spin::Cancelled => panic!("unexpected cancellation"),
        }
        assert_eq!(session.stage(), crate::domain::models::Stage::WinnerRevealed);
    }
}
