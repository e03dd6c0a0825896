//! Prompt rendering for the generative strategy.

use crate::domain::models::{Context, SHORTLIST_SIZE};
use crate::services::response_parser::{FIELD_DELIMITER, RECORD_DELIMITER};

/// Renders the fixed recommendation prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub const fn new() -> Self {
        Self
    }

    /// Build the prompt, embedding every context field verbatim.
    pub fn build(&self, context: &Context) -> String {
        let location = if context.location.is_empty() {
            "지정 안 함"
        } else {
            context.location.as_str()
        };

        let format_lines = (0..SHORTLIST_SIZE)
            .map(|_| format!("메뉴명{FIELD_DELIMITER}추천이유"))
            .collect::<Vec<_>>()
            .join(&RECORD_DELIMITER.to_string());

        format!(
            r"당신은 센스 있는 메뉴 추천 전문가입니다.

[사용자 상황]
- 시간: {time}
- 위치: {location} (이 지역의 분위기나 맛집 스타일을 고려할 것)
- 날씨: {weather}
- 기분: {mood}
- 예산: {budget}

위 상황에 가장 적절한 서로 다른 스타일의 메뉴 {count}가지를 추천해주세요.

[출력 형식]
반드시 아래 형식으로 정확히 {count}줄만 출력하세요. 번호, 머리말, 부연 설명은 절대 붙이지 마세요.
메뉴명과 추천이유는 '{field}' 하나로 구분하고, 추천이유는 짧고 매력적으로 작성하세요.
{format_lines}",
            time = context.meal_time.label(),
            location = location,
            weather = context.weather.label(),
            mood = context.mood.label(),
            budget = context.budget.label(),
            count = SHORTLIST_SIZE,
            field = FIELD_DELIMITER,
            format_lines = format_lines,
        )
    }
}
