//! Common test utilities for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use menu_roulette::domain::errors::GenerationError;
use menu_roulette::domain::models::{Budget, Mood, RecommendationRequest, Weather};
use menu_roulette::domain::ports::TextGenerator;
use menu_roulette::services::{SelectionEngine, SpinSettings};

/// Text generator that replays scripted replies and records prompts
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<Vec<Result<String, String>>>,
    pub prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
        let mut replies: Vec<Result<String, String>> = replies
            .into_iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(GenerationError::Service(message)),
            None => Err(GenerationError::Service("script exhausted".to_string())),
        }
    }
}

pub fn request(location: &str, weather: Weather, mood: Mood, budget: Budget) -> RecommendationRequest {
    RecommendationRequest::new(location, weather, mood, budget)
}

/// Engine with no animation and fixed seeds
pub fn instant_engine(seed: u64) -> SelectionEngine {
    SelectionEngine::seeded(SpinSettings::instant(), seed ^ 0xA5A5, seed)
}

/// `generateContent` success body carrying `text`
pub fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 40,
            "totalTokenCount": 160
        }
    })
    .to_string()
}
