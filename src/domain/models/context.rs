//! Situational inputs and the resolved recommendation context.
//!
//! Every user-facing choice is a closed enumeration, so invalid values are
//! impossible by construction. Each variant carries the Korean label shown to
//! the user and embedded verbatim into generation prompts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Weather selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    Clear,
    Rain,
    Cloudy,
    Snow,
    FineDust,
    Heatwave,
    ColdWave,
}

impl Weather {
    pub const ALL: [Self; 7] = [
        Self::Clear,
        Self::Rain,
        Self::Cloudy,
        Self::Snow,
        Self::FineDust,
        Self::Heatwave,
        Self::ColdWave,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "맑음",
            Self::Rain => "비",
            Self::Cloudy => "흐림",
            Self::Snow => "눈",
            Self::FineDust => "미세먼지",
            Self::Heatwave => "폭염",
            Self::ColdWave => "한파",
        }
    }

    /// Situational tags implied by this weather.
    pub const fn situation_tags(self) -> &'static [SituationTag] {
        match self {
            Self::Rain => &[SituationTag::Rain],
            Self::Snow | Self::ColdWave => &[SituationTag::Cold],
            Self::Heatwave => &[SituationTag::Hot],
            Self::Clear | Self::Cloudy | Self::FineDust => &[],
        }
    }
}

/// Mood selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Excited,
    Tired,
    Gloomy,
    Stressed,
    Hungry,
    Dieting,
    CravingDrinks,
}

impl Mood {
    pub const ALL: [Self; 7] = [
        Self::Excited,
        Self::Tired,
        Self::Gloomy,
        Self::Stressed,
        Self::Hungry,
        Self::Dieting,
        Self::CravingDrinks,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excited => "신남",
            Self::Tired => "피곤함",
            Self::Gloomy => "우울",
            Self::Stressed => "스트레스 만땅",
            Self::Hungry => "배고픔",
            Self::Dieting => "다이어트",
            Self::CravingDrinks => "술 땡김",
        }
    }

    /// Situational tags implied by this mood.
    pub const fn situation_tags(self) -> &'static [SituationTag] {
        match self {
            Self::Stressed => &[SituationTag::Stress],
            Self::CravingDrinks => &[SituationTag::Alcohol],
            Self::Excited | Self::Tired | Self::Gloomy | Self::Hungry | Self::Dieting => &[],
        }
    }
}

/// Budget selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    Cheap,
    Moderate,
    Pricey,
    Flex,
}

impl Budget {
    pub const ALL: [Self; 4] = [Self::Cheap, Self::Moderate, Self::Pricey, Self::Flex];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cheap => "가성비(저렴)",
            Self::Moderate => "적당함(보통)",
            Self::Pricey => "맛있는거(비쌈)",
            Self::Flex => "가격상관없음(플렉스)",
        }
    }

    /// Price tier used to filter the static menu table (1..=3).
    pub const fn price_tier(self) -> u8 {
        match self {
            Self::Cheap => 1,
            Self::Moderate => 2,
            Self::Pricey | Self::Flex => 3,
        }
    }
}

/// Time-of-day bucket used by the generative strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealTime {
    Morning,
    Lunch,
    Dinner,
    LateNight,
}

impl MealTime {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "아침",
            Self::Lunch => "점심",
            Self::Dinner => "저녁",
            Self::LateNight => "야식",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Morning => "🌅",
            Self::Lunch => "☀️",
            Self::Dinner => "🌙",
            Self::LateNight => "🍺",
        }
    }
}

/// Time-of-day bucket used by the tabular strategy; doubles as a menu tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuSlot {
    Lunch,
    Dinner,
    Late,
    Snack,
}

impl MenuSlot {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Late => "late",
            Self::Snack => "snack",
        }
    }
}

/// Tags inferred from the weather and mood selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SituationTag {
    Rain,
    Cold,
    Hot,
    Stress,
    Alcohol,
}

impl SituationTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rain => "rain",
            Self::Cold => "cold",
            Self::Hot => "hot",
            Self::Stress => "stress",
            Self::Alcohol => "alcohol",
        }
    }
}

impl fmt::Display for SituationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw user inputs for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Free-text neighbourhood or area; may be empty
    #[serde(default)]
    pub location: String,
    pub weather: Weather,
    pub mood: Mood,
    pub budget: Budget,
}

impl RecommendationRequest {
    pub fn new(location: impl Into<String>, weather: Weather, mood: Mood, budget: Budget) -> Self {
        Self {
            location: location.into(),
            weather,
            mood,
            budget,
        }
    }

    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// Resolved situational context driving candidate generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Clock hour the context was resolved at
    pub hour: u32,
    pub meal_time: MealTime,
    pub menu_slot: MenuSlot,
    pub location: String,
    pub weather: Weather,
    pub mood: Mood,
    pub budget: Budget,
    pub situation: BTreeSet<SituationTag>,
}

impl Context {
    pub fn has(&self, tag: SituationTag) -> bool {
        self.situation.contains(&tag)
    }

    pub const fn price_tier(&self) -> u8 {
        self.budget.price_tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_tiers() {
        assert_eq!(Budget::Cheap.price_tier(), 1);
        assert_eq!(Budget::Moderate.price_tier(), 2);
        assert_eq!(Budget::Pricey.price_tier(), 3);
        assert_eq!(Budget::Flex.price_tier(), 3);
    }

    #[test]
    fn test_rain_label_contains_rain_character() {
        assert_eq!(Weather::Rain.label(), "비");
        assert_eq!(Weather::Rain.situation_tags(), &[SituationTag::Rain]);
    }

    #[test]
    fn test_cold_weathers_share_tag() {
        assert_eq!(Weather::Snow.situation_tags(), &[SituationTag::Cold]);
        assert_eq!(Weather::ColdWave.situation_tags(), &[SituationTag::Cold]);
    }

    #[test]
    fn test_only_stressed_mood_sets_stress() {
        for mood in Mood::ALL {
            let stressed = mood.situation_tags().contains(&SituationTag::Stress);
            assert_eq!(stressed, mood == Mood::Stressed, "{mood:?}");
        }
    }

    #[test]
    fn test_request_location_blank_is_missing() {
        let request = RecommendationRequest::new("   ", Weather::Clear, Mood::Hungry, Budget::Cheap);
        assert!(!request.has_location());
    }
}
