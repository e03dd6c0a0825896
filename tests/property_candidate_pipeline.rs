use menu_roulette::domain::models::{
    Budget, Candidate, CandidateSet, MealTime, MenuSlot, Mood, RecommendationRequest, Weather,
    MENU_TABLE,
};
use menu_roulette::services::context_resolver::{meal_time, menu_slot};
use menu_roulette::services::{
    parse_candidates, parse_records, ContextResolver, SelectionEngine, SpinSettings, TabularSource,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn weather() -> impl Strategy<Value = Weather> {
    prop::sample::select(Weather::ALL.to_vec())
}

fn mood() -> impl Strategy<Value = Mood> {
    prop::sample::select(Mood::ALL.to_vec())
}

fn budget() -> impl Strategy<Value = Budget> {
    prop::sample::select(Budget::ALL.to_vec())
}

/// Dish-like text without delimiters or emphasis markup
fn field() -> impl Strategy<Value = String> {
    "[가-힣a-zA-Z][가-힣a-zA-Z &]{0,12}[가-힣a-zA-Z]"
}

proptest! {
    /// Every hour lands in exactly one bucket of each scheme, and the
    /// resolved context carries the inputs through unchanged.
    #[test]
    fn prop_every_hour_resolves(
        hour in 0u32..24,
        weather in weather(),
        mood in mood(),
        budget in budget(),
    ) {
        let request = RecommendationRequest::new("합정", weather, mood, budget);
        let context = ContextResolver::new().resolve(hour, &request);

        prop_assert_eq!(context.meal_time, meal_time(hour));
        prop_assert_eq!(context.menu_slot, menu_slot(hour));
        prop_assert_eq!(context.weather, weather);
        prop_assert_eq!(context.mood, mood);
        prop_assert_eq!(context.budget, budget);
        prop_assert_eq!(context.location.as_str(), "합정");

        let meal_buckets = [
            (5..=10).contains(&hour),
            (11..=15).contains(&hour),
            (16..=21).contains(&hour),
            !(5..=21).contains(&hour),
        ];
        prop_assert_eq!(meal_buckets.iter().filter(|b| **b).count(), 1);

        let expected_slot = match hour {
            10..=14 => MenuSlot::Lunch,
            15..=20 => MenuSlot::Dinner,
            21..=23 | 0..=3 => MenuSlot::Late,
            _ => MenuSlot::Snack,
        };
        prop_assert_eq!(context.menu_slot, expected_slot);
    }

    /// Reasons may themselves contain the field delimiter; only the first
    /// one splits a record.
    #[test]
    fn prop_parser_splits_on_first_colon(
        names in prop::collection::vec(field(), 3),
        reasons in prop::collection::vec(field(), 3),
        pipe in any::<bool>(),
    ) {
        let separator = if pipe { "|" } else { "\n" };
        let response = names
            .iter()
            .zip(&reasons)
            .map(|(name, reason)| format!("**{name}**: {reason}: 진짜로"))
            .collect::<Vec<_>>()
            .join(separator);

        let set = parse_candidates(&response).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(set.len(), 3);
        for ((candidate, name), reason) in set.iter().zip(&names).zip(&reasons) {
            prop_assert_eq!(candidate.name.as_str(), name.as_str());
            prop_assert_eq!(candidate.reason.clone(), format!("{}: 진짜로", reason.trim()));
        }
    }

    /// Fewer than three usable records always fail as a whole.
    #[test]
    fn prop_short_responses_fail(
        names in prop::collection::vec(field(), 0..3),
        noise in "[가-힣 ]{0,10}",
    ) {
        let mut lines: Vec<String> = names.iter().map(|n| format!("{n}:맛있어요")).collect();
        lines.push(noise);

        let response = lines.join("\n");
        prop_assert!(parse_records(&response).len() < 3);
        prop_assert!(parse_candidates(&response).is_err());
    }

    /// Tabular shortlists only hold entries of the requested price tier, in
    /// strictly ranked order.
    #[test]
    fn prop_tabular_respects_tier(
        hour in 0u32..24,
        weather in weather(),
        mood in mood(),
        budget in budget(),
        seed in any::<u64>(),
    ) {
        let request = RecommendationRequest::new("", weather, mood, budget);
        let context = ContextResolver::new().resolve(hour, &request);
        let ranked = TabularSource::seeded(seed).rank(&context);

        let tier_size = MENU_TABLE.iter().filter(|e| e.price_tier == budget.price_tier()).count();
        prop_assert_eq!(ranked.len(), tier_size);
        prop_assert!(ranked.iter().all(|s| s.entry.price_tier == budget.price_tier()));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// The winner is always a member of the shortlist.
    #[test]
    fn prop_winner_is_a_candidate(
        names in prop::collection::vec(field(), 1..=3),
        seed in any::<u64>(),
    ) {
        let candidates: Vec<Candidate> = names
            .iter()
            .filter_map(|n| Candidate::parse(n, "이유"))
            .collect();
        let set = CandidateSet::new(candidates).ok_or_else(|| TestCaseError::reject("empty"))?;

        let mut engine = SelectionEngine::seeded(SpinSettings::instant(), seed, seed);
        let winner = engine.draw_winner(&set);
        prop_assert!(set.iter().any(|c| c == &winner));
    }
}

#[test]
fn test_meal_time_boundaries() {
    assert_eq!(meal_time(4), MealTime::LateNight);
    assert_eq!(meal_time(5), MealTime::Morning);
    assert_eq!(meal_time(10), MealTime::Morning);
    assert_eq!(meal_time(11), MealTime::Lunch);
    assert_eq!(meal_time(15), MealTime::Lunch);
    assert_eq!(meal_time(16), MealTime::Dinner);
    assert_eq!(meal_time(21), MealTime::Dinner);
    assert_eq!(meal_time(22), MealTime::LateNight);
}
