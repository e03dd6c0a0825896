//! Pure mapping from clock hour and user selections to a [`Context`].

use chrono::{Local, Timelike};
use std::collections::BTreeSet;

use crate::domain::models::{Context, MealTime, MenuSlot, RecommendationRequest, SituationTag};

/// Resolves raw inputs into situational tags
///
/// Total over every `u32` hour: anything outside 0..=23 lands in the explicit
/// fallback bucket of each scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextResolver;

impl ContextResolver {
    pub const fn new() -> Self {
        Self
    }

    /// Resolve a context for `hour` (0-23).
    pub fn resolve(&self, hour: u32, request: &RecommendationRequest) -> Context {
        Context {
            hour,
            meal_time: meal_time(hour),
            menu_slot: menu_slot(hour),
            location: request.location.trim().to_string(),
            weather: request.weather,
            mood: request.mood,
            budget: request.budget,
            situation: situation_tags(request),
        }
    }
}

/// Current local hour (0-23).
pub fn current_hour() -> u32 {
    Local::now().hour()
}

/// Generative buckets: 05-10 morning, 11-15 lunch, 16-21 dinner, else late night.
pub const fn meal_time(hour: u32) -> MealTime {
    match hour {
        5..=10 => MealTime::Morning,
        11..=15 => MealTime::Lunch,
        16..=21 => MealTime::Dinner,
        _ => MealTime::LateNight,
    }
}

/// Tabular buckets: 10-14 lunch, 15-20 dinner, 21-03 late, else snack.
pub const fn menu_slot(hour: u32) -> MenuSlot {
    match hour {
        10..=14 => MenuSlot::Lunch,
        15..=20 => MenuSlot::Dinner,
        21..=23 | 0..=3 => MenuSlot::Late,
        _ => MenuSlot::Snack,
    }
}

fn situation_tags(request: &RecommendationRequest) -> BTreeSet<SituationTag> {
    request
        .weather
        .situation_tags()
        .iter()
        .chain(request.mood.situation_tags())
        .copied()
        .collect()
}
